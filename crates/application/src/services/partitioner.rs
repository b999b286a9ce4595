use ferrous_rdns_domain::DomainError;

/// Splits `items` into `workers` round-robin partitions.
///
/// `items[i]` lands in partition `i % workers`, and each partition keeps the
/// relative input order. With fewer items than workers the trailing
/// partitions are empty.
pub fn partition<T>(items: &[T], workers: usize) -> Result<Vec<Vec<&T>>, DomainError> {
    if workers == 0 {
        return Err(DomainError::InvalidThreadCount(workers));
    }

    let per_worker = items.len().div_ceil(workers);
    let mut partitions: Vec<Vec<&T>> = (0..workers)
        .map(|_| Vec::with_capacity(per_worker))
        .collect();

    for (i, item) in items.iter().enumerate() {
        partitions[i % workers].push(item);
    }

    Ok(partitions)
}
