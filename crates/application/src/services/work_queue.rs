use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared cursor over a fixed list of input items.
///
/// Each item is claimed by exactly one caller of [`WorkQueue::next_item`].
pub struct WorkQueue<'a> {
    items: &'a [String],
    cursor: AtomicUsize,
}

impl<'a> WorkQueue<'a> {
    pub fn new(items: &'a [String]) -> Self {
        Self {
            items,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn next_item(&self) -> Option<&'a str> {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.items.get(index).map(String::as_str)
    }

    /// Iterator that keeps claiming items until the queue is drained.
    pub fn drain(&self) -> impl Iterator<Item = &'a str> + '_ {
        std::iter::from_fn(move || self.next_item())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
