// # hzdns - Hetzner DNS command line
//
// Thin presentation layer over the `hetzner-dns` library. All API logic
// lives in the library; this binary only parses arguments, builds a
// `Client` and renders results as aligned text tables.
//
// ## Commands
//
// - `hzdns list`: every zone, then the records of each zone
// - `hzdns add-record --zone ZONE-ID NAME TYPE VALUE [--ttl SECS]`
//   (alias `add`): create one record
//
// ## Configuration
//
// Flags take precedence over the environment:
//
// - `HETZNER_API_KEY`: API token (required)
// - `HZDNS_BASE_URL`: API endpoint override
// - `HZDNS_TIMEOUT_SECS`: per-request timeout
// - `HZDNS_DEBUG`: dump every request and response (token redacted)
// - `HZDNS_LOG_LEVEL`: trace, debug, info, warn, error
//
// ## Example
//
// ```bash
// export HETZNER_API_KEY=your_token
//
// hzdns list
// hzdns add --zone 3n4kTz5bUmWCwqHRyzcrnQ www A 192.0.2.1 --ttl 300
// ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hetzner_dns::{Client, ClientConfig, Record, RecordRequest, Timestamp, Zone};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{Level, debug, error};
use tracing_subscriber::FmtSubscriber;

/// Exit codes
///
/// - 0: Success
/// - 1: Configuration error (bad flags, missing token, bad URL)
/// - 2: The API call failed
///
/// A missing API key is caught by `Cli::validate` and exits with 1, before
/// the library could report `MissingCredentials`.
#[derive(Debug, Clone, Copy)]
enum HzdnsExitCode {
    Success = 0,
    ConfigError = 1,
    RuntimeError = 2,
}

impl From<HzdnsExitCode> for ExitCode {
    fn from(code: HzdnsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

#[derive(Parser, Debug)]
#[command(name = "hzdns")]
#[command(about = "Manage Hetzner DNS zones and records", long_about = None)]
#[command(version)]
struct Cli {
    /// API token
    #[arg(long, env = "HETZNER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API endpoint
    #[arg(long, env = "HZDNS_BASE_URL", default_value = hetzner_dns::DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "HZDNS_TIMEOUT_SECS", default_value_t = hetzner_dns::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Dump requests and responses
    #[arg(long, env = "HZDNS_DEBUG")]
    debug: bool,

    /// Log level
    #[arg(long, env = "HZDNS_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all zones and their records
    List,

    /// Create a DNS record
    #[command(visible_alias = "add")]
    AddRecord {
        /// Zone ID the record belongs to
        #[arg(short, long = "zone", value_name = "ZONE-ID")]
        zone_id: String,

        /// Record name (e.g. www, @)
        name: String,

        /// Record type (A, AAAA, CNAME, MX, TXT, ...)
        #[arg(value_name = "TYPE")]
        record_type: String,

        /// Record value
        value: String,

        /// TTL in seconds (default: zone TTL)
        #[arg(long)]
        ttl: Option<u32>,
    },
}

impl Cli {
    fn validate(&self) -> Result<()> {
        if self.api_key.as_deref().is_none_or(str::is_empty) {
            anyhow::bail!(
                "{} is required. Set it via: export {}=your_token",
                hetzner_dns::API_KEY_ENV,
                hetzner_dns::API_KEY_ENV
            );
        }

        if self.timeout_secs == 0 {
            anyhow::bail!("HZDNS_TIMEOUT_SECS must be greater than 0");
        }

        parse_level(&self.log_level)?;

        if let Command::AddRecord { zone_id, .. } = &self.command
            && zone_id.is_empty()
        {
            anyhow::bail!("--zone cannot be empty");
        }

        Ok(())
    }

    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new()
            .with_base_url(&self.base_url)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_debug(self.debug);
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        config
    }
}

fn parse_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "HZDNS_LOG_LEVEL '{}' is not valid. Valid levels: trace, debug, info, warn, error",
            level
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = cli.validate() {
        eprintln!("Configuration error: {}", e);
        return HzdnsExitCode::ConfigError.into();
    }

    // The request dump is logged at info level, so --debug lifts the level
    let level = match parse_level(&cli.log_level) {
        Ok(level) if cli.debug => level.max(Level::INFO),
        Ok(level) => level,
        Err(_) => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return HzdnsExitCode::ConfigError.into();
    }

    let client = match Client::new(cli.client_config()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return HzdnsExitCode::ConfigError.into();
        }
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return HzdnsExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        match cli.command {
            Command::List => list(&client).await,
            Command::AddRecord {
                zone_id,
                name,
                record_type,
                value,
                ttl,
            } => {
                let mut request = RecordRequest::new(zone_id, record_type, name, value);
                if let Some(ttl) = ttl {
                    request = request.with_ttl(ttl);
                }
                add_record(&client, &request).await
            }
        }
    });

    match result {
        Ok(()) => HzdnsExitCode::Success.into(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            HzdnsExitCode::RuntimeError.into()
        }
    }
}

async fn list(client: &Client) -> Result<()> {
    let page = client
        .list_zones("", "", 1, 100)
        .await
        .context("can't list zones")?;
    debug!("Fetched {} zone(s)", page.zones.len());

    print!("{}", zones_table(&page.zones));

    for zone in &page.zones {
        let records = client
            .list_records(&zone.id, 0, 0)
            .await
            .with_context(|| format!("can't list records of zone {}", zone.name))?;

        println!("{}", "=".repeat(80));
        println!("Zone {} ({})", zone.name, zone.id);
        print!("{}", records_table(&records.records));
    }

    Ok(())
}

async fn add_record(client: &Client, request: &RecordRequest) -> Result<()> {
    let response = client
        .create_record(request)
        .await
        .context("can't create record")?;

    println!("OK.");
    print!("{}", records_table(std::slice::from_ref(&response.record)));
    Ok(())
}

fn zones_table(zones: &[Zone]) -> String {
    let rows = zones
        .iter()
        .map(|z| {
            vec![
                z.id.clone(),
                z.name.clone(),
                z.status.to_string(),
                z.project.clone(),
                z.records_count.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    render_table(&["ID", "Name", "Status", "Project", "# Records"], &rows)
}

fn records_table(records: &[Record]) -> String {
    let rows = records
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.name.clone(),
                r.record_type.clone(),
                r.value.clone(),
                r.ttl.to_string(),
                format_timestamp(&r.created),
            ]
        })
        .collect::<Vec<_>>();

    render_table(&["ID", "Name", "Type", "Value", "TTL", "Created"], &rows)
}

fn format_timestamp(ts: &Timestamp) -> String {
    if ts.is_zero() {
        "-".to_string()
    } else {
        ts.to_string()
    }
}

/// Left-aligned columns separated by two spaces, one line per row
fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        let mut out = String::new();
        for (i, (cell, width)) in cells.iter().zip(&widths).enumerate() {
            if i + 1 == cells.len() {
                out.push_str(cell);
            } else {
                out.push_str(&format!("{:<width$}  ", cell, width = *width));
            }
        }
        out.push('\n');
        out
    };

    let mut table = line(header.to_vec());
    for row in rows {
        table.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    table
}
