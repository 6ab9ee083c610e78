/*
[INPUT]:  CLI arguments, optional YAML configuration file
[OUTPUT]: VALR REST responses printed as pretty JSON
[POS]:    Binary entry point
[UPDATE]: When adding commands or changing CLI flags
*/

mod config;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use valr_adapter::{TradeHistoryRequest, TransactionHistoryRequest, ValrClient};

#[derive(Parser, Debug)]
#[command(name = "valr-cli", version, about = "Query the VALR REST API")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported currencies
    Currencies,
    /// List supported currency pairs
    Pairs,
    /// Market summary for one pair, or all pairs
    Summary { pair: Option<String> },
    /// Aggregated order book
    Book { pair: String },
    /// Supported order types for one pair, or all pairs
    OrderTypes { pair: Option<String> },
    /// Server time
    Time,
    /// Exchange status
    Status,
    /// Account balances (signed)
    Balances,
    /// Account trade history for a pair (signed)
    Trades {
        pair: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Account transaction history (signed)
    Transactions {
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        skip: Option<u32>,
    },
    /// Default deposit address for a currency (signed)
    DepositAddress { currency: String },
    /// Withdrawal minimum and fee for a currency (signed)
    WithdrawalInfo { currency: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = match &args.config_path {
        Some(path) => CliConfig::from_file(path).context("load config")?,
        None => CliConfig::default(),
    };
    let client = config.build_client(args.base_url.as_deref())?;
    info!(
        base_url = %client.base_url(),
        signed = client.has_credentials(),
        "client ready"
    );

    run(&client, args.command).await
}

async fn run(client: &ValrClient, command: Command) -> Result<()> {
    debug!(?command, "running command");
    match command {
        Command::Currencies => print_json(&client.currencies().await?),
        Command::Pairs => print_json(&client.currency_pairs().await?),
        Command::Summary { pair: Some(pair) } => {
            print_json(&client.market_summary_for_pair(&pair).await?)
        }
        Command::Summary { pair: None } => print_json(&client.market_summary().await?),
        Command::Book { pair } => print_json(&client.order_book(&pair).await?),
        Command::OrderTypes { pair: Some(pair) } => {
            let mut types: Vec<_> = client.order_types_for_pair(&pair).await?.into_iter().collect();
            types.sort_by_key(|order_type| format!("{order_type:?}"));
            print_json(&types)
        }
        Command::OrderTypes { pair: None } => print_json(&client.order_types().await?),
        Command::Time => print_json(&client.server_time().await?),
        Command::Status => print_json(&client.status().await?),
        Command::Balances => print_json(&client.balances().await?),
        Command::Trades { pair, limit } => {
            let request = TradeHistoryRequest { limit };
            print_json(&client.trade_history(&pair, &request).await?)
        }
        Command::Transactions {
            currency,
            limit,
            skip,
        } => {
            let request = TransactionHistoryRequest {
                currency,
                limit,
                skip,
                ..Default::default()
            };
            print_json(&client.transaction_history(&request).await?)
        }
        Command::DepositAddress { currency } => {
            print_json(&client.deposit_address(&currency).await?)
        }
        Command::WithdrawalInfo { currency } => {
            print_json(&client.withdrawal_info(&currency).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("render response")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
