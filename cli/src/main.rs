//! `ironclad` — command-line client for Ironclad Vault.

mod commands;
mod config;
mod render;

use clap::Parser;
use std::path::PathBuf;

use ironclad_client::{ClientError, CreateVaultParams, Session};
use ironclad_types::{ListingId, NetworkId, Principal, SatAmount, VaultId};

use config::CliConfig;

#[derive(Parser)]
#[command(name = "ironclad", about = "Ironclad Vault command-line client")]
struct Cli {
    /// Network to talk to: "mainnet", "testnet", or "local".
    /// When a config file is provided, defaults to the file's value.
    #[arg(long, env = "IRONCLAD_NETWORK")]
    network: Option<String>,

    /// Gateway URL override (defaults to the network's gateway).
    #[arg(long, env = "IRONCLAD_GATEWAY_URL")]
    gateway_url: Option<String>,

    /// Principal to act as.
    #[arg(long, env = "IRONCLAD_PRINCIPAL")]
    principal: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "IRONCLAD_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Inspect and operate vaults.
    Vaults {
        #[command(subcommand)]
        action: VaultsAction,
    },
    /// Manage auto-reinvest plans.
    Reinvest {
        #[command(subcommand)]
        action: ReinvestAction,
    },
    /// Browse and trade marketplace listings.
    Market {
        #[command(subcommand)]
        action: MarketAction,
    },
    /// Follow vault state until Ctrl-C.
    Watch {
        /// Perform a single fetch instead of polling.
        #[arg(long)]
        no_auto_refresh: bool,
    },
}

#[derive(clap::Subcommand)]
enum VaultsAction {
    /// List all vaults owned by the principal.
    List,
    /// Show one vault in detail.
    Show { id: u64 },
    /// Create a new vault.
    Create {
        /// Deposit amount the vault waits for, in satoshi.
        #[arg(long)]
        expected_deposit: u64,
        /// Lock duration in seconds, counted from the deposit.
        #[arg(long)]
        lock_for: u64,
        /// Beneficiary principal for the dead-man-switch.
        #[arg(long)]
        beneficiary: Option<String>,
        /// Inactivity window in seconds before the beneficiary may claim.
        #[arg(long)]
        inheritance_timeout: Option<u64>,
    },
    /// Ask the canister to record the lock as elapsed.
    Unlock { id: u64 },
    /// Withdraw from an unlockable vault.
    Withdraw {
        id: u64,
        /// Amount in satoshi.
        #[arg(long)]
        amount: u64,
        /// Destination Bitcoin address.
        #[arg(long)]
        to: String,
    },
    /// Prove liveness, resetting the inheritance window.
    KeepAlive { id: u64 },
}

#[derive(clap::Subcommand)]
enum ReinvestAction {
    /// Show the plan on a vault.
    Show { id: u64 },
    /// Schedule a plan.
    Schedule {
        id: u64,
        /// Re-lock period in seconds.
        #[arg(long)]
        lock_for: u64,
    },
    /// Cancel the plan.
    Cancel { id: u64 },
    /// Execute the plan immediately.
    Execute { id: u64 },
}

#[derive(clap::Subcommand)]
enum MarketAction {
    /// Browse open listings.
    Listings,
    /// List a vault for sale.
    List {
        vault_id: u64,
        /// Asking price in satoshi.
        #[arg(long)]
        price: u64,
    },
    /// Cancel a listing.
    Cancel { listing_id: u64 },
    /// Buy a listing.
    Buy { listing_id: u64 },
}

fn parse_network(s: &str) -> Option<NetworkId> {
    match s.to_lowercase().as_str() {
        "mainnet" => Some(NetworkId::Mainnet),
        "testnet" => Some(NetworkId::Testnet),
        "local" => Some(NetworkId::Local),
        _ => None,
    }
}

/// Layer a config file under CLI flags and env vars.
fn effective_config(cli: &Cli) -> anyhow::Result<CliConfig> {
    let base = match &cli.config {
        Some(path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };

    let network = match &cli.network {
        Some(name) => parse_network(name)
            .ok_or_else(|| anyhow::anyhow!("unknown network {name:?} (mainnet|testnet|local)"))?,
        None => base.network,
    };

    Ok(CliConfig {
        network,
        gateway_url: cli.gateway_url.clone().or(base.gateway_url),
        principal: cli.principal.clone().or(base.principal),
        log_level: cli.log_level.clone().unwrap_or(base.log_level),
    })
}

fn build_session(config: &CliConfig) -> anyhow::Result<Session> {
    let principal = config
        .principal
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("no principal configured (--principal or config file)"))?;
    let principal = Principal::parse(principal)?;

    let session = match &config.gateway_url {
        Some(url) => Session::connect_with_gateway(url.clone(), config.network, principal)?,
        None => Session::connect(config.network, principal)?,
    };
    Ok(session)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = effective_config(&cli)?;
    ironclad_utils::init_tracing_with_default(&config.log_level);

    let session = build_session(&config)?;

    let output = match cli.command {
        Command::Vaults { action } => match action {
            VaultsAction::List => commands::vaults_list(&session).await,
            VaultsAction::Show { id } => commands::vaults_show(&session, VaultId::new(id)).await,
            VaultsAction::Create {
                expected_deposit,
                lock_for,
                beneficiary,
                inheritance_timeout,
            } => {
                let beneficiary = beneficiary
                    .as_deref()
                    .map(Principal::parse)
                    .transpose()?;
                let params = CreateVaultParams {
                    expected_deposit: SatAmount::new(expected_deposit),
                    lock_duration_secs: lock_for,
                    beneficiary,
                    inheritance_timeout_secs: inheritance_timeout,
                };
                commands::vaults_create(&session, params).await
            }
            VaultsAction::Unlock { id } => {
                commands::vaults_unlock(&session, VaultId::new(id)).await
            }
            VaultsAction::Withdraw { id, amount, to } => {
                commands::vaults_withdraw(&session, VaultId::new(id), SatAmount::new(amount), &to)
                    .await
            }
            VaultsAction::KeepAlive { id } => {
                commands::vaults_keep_alive(&session, VaultId::new(id)).await
            }
        },
        Command::Reinvest { action } => match action {
            ReinvestAction::Show { id } => {
                commands::reinvest_show(&session, VaultId::new(id)).await
            }
            ReinvestAction::Schedule { id, lock_for } => {
                commands::reinvest_schedule(&session, VaultId::new(id), lock_for).await
            }
            ReinvestAction::Cancel { id } => {
                commands::reinvest_cancel(&session, VaultId::new(id)).await
            }
            ReinvestAction::Execute { id } => {
                commands::reinvest_execute(&session, VaultId::new(id)).await
            }
        },
        Command::Market { action } => match action {
            MarketAction::Listings => commands::market_listings(&session).await,
            MarketAction::List { vault_id, price } => {
                commands::market_list(&session, VaultId::new(vault_id), SatAmount::new(price))
                    .await
            }
            MarketAction::Cancel { listing_id } => {
                commands::market_cancel(&session, ListingId::new(listing_id)).await
            }
            MarketAction::Buy { listing_id } => {
                commands::market_buy(&session, ListingId::new(listing_id)).await
            }
        },
        Command::Watch { no_auto_refresh } => {
            return match commands::watch(&session, !no_auto_refresh).await {
                Ok(()) => Ok(()),
                // canister failures read the same as for every other command
                Err(error) => match error.downcast_ref::<ClientError>() {
                    Some(client_error) => {
                        report_failure(client_error);
                        std::process::exit(1);
                    }
                    None => Err(error),
                },
            };
        }
    };

    match output {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(error) => {
            report_failure(&error);
            std::process::exit(1);
        }
    }
}

fn report_failure(error: &ClientError) {
    eprintln!("{}", render::client_error(error));
}
