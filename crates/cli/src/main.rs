use clap::Parser;
use ferrous_rdns_application::use_cases::LookupSettings;
use ferrous_rdns_domain::{CliOverrides, Protocol, Schedule};
use std::io;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser, Debug)]
#[command(name = "ferrous-rdns")]
#[command(version)]
#[command(about = "Ferrous rDNS - Bulk reverse DNS lookups for IP addresses read from stdin")]
struct Cli {
    /// Number of lookup threads
    #[arg(
        short = 't',
        long,
        value_name = "THREADS",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    threads: Option<usize>,

    /// DNS server address (host name or IP)
    #[arg(short = 'r', long = "resolver", value_name = "ADDRESS")]
    resolver: Option<String>,

    /// Protocol used to reach the DNS server (tcp, udp)
    #[arg(short = 'P', long, value_name = "PROTOCOL", value_parser = parse_protocol)]
    protocol: Option<Protocol>,

    /// DNS server port
    #[arg(short = 'p', long, value_name = "PORT")]
    port: Option<u16>,

    /// Print bare hostnames instead of "<ip>\t<hostname>"
    #[arg(short = 'd', long = "domain")]
    domain_only: bool,

    /// Skip addresses without a reverse name instead of printing them numerically
    #[arg(short = 'n', long)]
    name_required: bool,

    /// Work distribution across threads (static, shared)
    #[arg(long, value_name = "SCHEDULE", value_parser = parse_schedule)]
    schedule: Option<Schedule>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            threads: self.threads,
            resolver_address: self.resolver.clone(),
            protocol: self.protocol,
            port: self.port,
            domain_only: self.domain_only,
            name_required: self.name_required,
            schedule: self.schedule,
            log_level: self.log_level.clone(),
        }
    }
}

fn parse_protocol(value: &str) -> Result<Protocol, String> {
    value.parse().map_err(|e: ferrous_rdns_domain::ConfigError| e.to_string())
}

fn parse_schedule(value: &str) -> Result<Schedule, String> {
    value.parse().map_err(|e: ferrous_rdns_domain::ConfigError| e.to_string())
}

/// Usage errors exit with status 1; `--help` and `--version` with 0.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        resolver = %config.resolver.address,
        protocol = %config.resolver.protocol,
        port = config.resolver.port,
        "Starting Ferrous rDNS"
    );

    let items = bootstrap::read_input(io::stdin().lock())?;

    let services = di::LookupServices::new(&config);
    let settings = LookupSettings::from_config(&config);

    match services
        .resolve_batch
        .execute(&config.resolver, &settings, &items)
    {
        Ok(report) => {
            info!(
                items = report.items,
                resolved = report.resolved,
                lines = report.lines,
                "Done"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Reverse lookup run failed");
            Err(e.into())
        }
    }
}
