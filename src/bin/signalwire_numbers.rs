//! signalwire-numbers: search available phone numbers and inspect the project account
//!
//! Usage:
//!   signalwire-numbers search <country> [--toll-free] [--area-code N] [--contains P] [--limit N]
//!   signalwire-numbers account
//!
//! Configuration comes from SIGNALWIRE_PROJECT_ID, SIGNALWIRE_TOKEN and SIGNALWIRE_SPACE_URL.

use anyhow::{anyhow, bail, Context};
use futures::TryStreamExt;
use signalwire_rest::{Client, Error, Instance, NumberSearch, ResourceKind};
use tracing_subscriber::EnvFilter;

const DEFAULT_LIMIT: usize = 20;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let outcome = match args[1].as_str() {
        "search" => cmd_search(&args[2..]).await,
        "account" => cmd_account().await,
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome {
        // REST failures render themselves (coloured when stderr is a terminal).
        match e.downcast_ref::<Error>() {
            Some(Error::Rest(rest)) => eprintln!("{rest}"),
            _ => eprintln!("error: {e:#}"),
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"signalwire-numbers: SignalWire number search

USAGE:
    signalwire-numbers <COMMAND> [OPTIONS]

COMMANDS:
    search <country> [OPTIONS]  Search numbers available for purchase
        --toll-free             Search toll-free instead of local numbers
        --area-code <N>         Restrict to an area code
        --contains <PATTERN>    Digits or letters the number must contain
        --limit <N>             Maximum results (default {DEFAULT_LIMIT})
    account                     Show the project account
    version                     Show version information
    help                        Show this help message

ENVIRONMENT:
    SIGNALWIRE_PROJECT_ID       Project id (required)
    SIGNALWIRE_TOKEN            API token (required)
    SIGNALWIRE_SPACE_URL        Space host, e.g. example.signalwire.com (required)
    SIGNALWIRE_HTTP_TIMEOUT_SECS
    SIGNALWIRE_PROXY_URL
    RUST_LOG                    Log filter (default: warn)"#
    );
}

fn cmd_version() {
    println!("signalwire-numbers {}", env!("CARGO_PKG_VERSION"));
}

struct SearchArgs {
    country: String,
    toll_free: bool,
    limit: usize,
    filters: NumberSearch,
}

fn parse_search(args: &[String]) -> anyhow::Result<SearchArgs> {
    let mut country = None;
    let mut toll_free = false;
    let mut limit = DEFAULT_LIMIT;
    let mut filters = NumberSearch::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--toll-free" => toll_free = true,
            "--area-code" => {
                let value = iter.next().ok_or_else(|| anyhow!("--area-code needs a value"))?;
                filters = filters.area_code(value.parse::<u32>().with_context(|| format!("bad area code '{value}'"))?);
            }
            "--contains" => {
                let value = iter.next().ok_or_else(|| anyhow!("--contains needs a value"))?;
                filters = filters.contains(value.as_str());
            }
            "--limit" => {
                let value = iter.next().ok_or_else(|| anyhow!("--limit needs a value"))?;
                limit = value.parse::<usize>().with_context(|| format!("bad limit '{value}'"))?;
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            positional if country.is_none() => country = Some(positional.to_uppercase()),
            extra => bail!("unexpected argument {extra}"),
        }
    }

    Ok(SearchArgs {
        country: country.ok_or_else(|| anyhow!("search needs a country code, e.g. US"))?,
        toll_free,
        limit,
        filters,
    })
}

async fn cmd_search(args: &[String]) -> anyhow::Result<()> {
    let search = parse_search(args)?;
    let client = Client::from_env()?;
    let numbers = client.api().available_phone_numbers(&search.country);

    if search.toll_free {
        print_all(numbers.toll_free().stream(&search.filters, Some(search.limit), None)).await
    } else {
        print_all(numbers.local().stream(&search.filters, Some(search.limit), None)).await
    }
}

async fn print_all<K: ResourceKind>(mut records: signalwire_rest::BoxStream<'static, Instance<K>>) -> anyhow::Result<()> {
    while let Some(record) = records.try_next().await? {
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}

async fn cmd_account() -> anyhow::Result<()> {
    let client = Client::from_env()?;
    let account = client.api().account().fetch().await?;
    println!("{}", serde_json::to_string_pretty(&account)?);
    Ok(())
}
