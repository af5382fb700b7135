use clap::Parser;
use ip_subnet_calc::config::{Config, OutputFormat};
use ip_subnet_calc::output::{
    partition_csv, render_json, render_subnet_table, render_text, report_csv, report_lines,
    CalculationReport,
};
use ip_subnet_calc::processing::split_cidr;
use ip_subnet_calc::{calculate, parse_and_validate, subnet_with_limit, summarize, SubnetError};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::io::IsTerminal;
use std::path::Path;

/// Compute network, broadcast, masks, host ranges and subnets for an IPv4 or
/// IPv6 address.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// IP address, optionally with its prefix (e.g. 192.168.1.1/24).
    address: String,

    /// Subnet mask or prefix: 24, /24, 255.255.255.0 or ffff:ffff::.
    mask: Option<String>,

    /// New, longer prefix to split the network into.
    #[arg(short = 'n', long = "new-prefix")]
    new_prefix: Option<String>,

    /// Output format [env: SUBNET_CALC_FORMAT].
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<OutputFormat>,

    /// Largest number of subnets to list [env: SUBNET_CALC_MAX_SUBNETS].
    #[arg(long = "max-subnets")]
    max_subnets: Option<u64>,

    /// log4rs configuration file [env: SUBNET_CALC_LOG_CONFIG].
    #[arg(long = "log-config")]
    log_config: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(max) = cli.max_subnets {
        config.max_subnets = max;
    }
    if let Some(path) = cli.log_config {
        config.log_config = path;
    }
    init_logging(&config.log_config)?;
    log::info!("#Start main() {config:?}");

    let (address, mask) = match (&cli.mask, split_cidr(&cli.address)) {
        (Some(mask), _) => (cli.address.as_str(), mask.as_str()),
        (None, Some((address, len))) => (address, len),
        (None, None) => (cli.address.as_str(), ""),
    };

    let input = parse_and_validate(address, mask)?;
    let result = calculate(&input);

    let summary = cli
        .new_prefix
        .as_deref()
        .map(|p| summarize(&result, p))
        .transpose()?;
    let partition = match cli.new_prefix.as_deref() {
        Some(p) => match subnet_with_limit(&result, p, config.max_subnets) {
            Ok(partition) => Some(partition),
            Err(SubnetError::TooManySubnets { count, limit }) => {
                log::warn!("Not listing {count} subnets, limit {limit}");
                None
            }
            Err(e) => return Err(e.into()),
        },
        None => None,
    };

    let lines = report_lines(&result, summary.as_ref());
    match config.format {
        OutputFormat::Text => {
            print!("{}", render_text(&lines, std::io::stdout().is_terminal()));
            if let Some(partition) = &partition {
                println!();
                print!("{}", render_subnet_table(partition));
            }
        }
        OutputFormat::Csv => {
            print!("{}", report_csv(&lines));
            if let Some(partition) = &partition {
                println!();
                print!("{}", partition_csv(partition));
            }
        }
        OutputFormat::Json => {
            let report = CalculationReport {
                result: &result,
                summary: summary.as_ref(),
                subnets: partition.as_ref(),
            };
            println!("{}", render_json(&report)?);
        }
    }

    log::info!("#End main()");
    Ok(())
}

/// Use the log4rs file when present, otherwise warnings to stderr.
fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(path).exists() {
        log4rs::init_file(path, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
