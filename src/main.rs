//! Newsgraph client CLI.
//!
//! Drives the application controller from the command line: browse the
//! feed, submit and mint articles, inspect wallet balances, and dump the
//! metagraph's node info.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use newsgraph_client::config::loader::load_config;
use newsgraph_client::controller::View;
use newsgraph_client::observability::init_logging;
use newsgraph_client::{AppController, ClientConfig, NewsGateway, WalletSession};

#[derive(Parser)]
#[command(name = "newsgraph")]
#[command(about = "News feed and NFT minting client for a metagraph", long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults + env overrides when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a page of the news feed
    Feed {
        #[arg(default_value_t = 1)]
        page: u32,
    },
    /// Dump the unpaged article listing
    All {
        #[arg(default_value_t = 100)]
        limit: u32,
    },
    /// Show a single article
    Article { id: String },
    /// Submit an article URL for ingestion (uses an ephemeral wallet)
    Submit { url: String },
    /// Mint an article as an NFT (uses an ephemeral wallet)
    Mint { id: String },
    /// List the minted items of a fresh wallet session
    MyItems,
    /// Show the balance of an address (defaults to a fresh session address)
    Balance { address: Option<String> },
    /// Transfer funds from a fresh wallet session
    Transfer {
        to: String,
        amount: u64,
        #[arg(default_value_t = 0)]
        fee: u64,
    },
    /// Show aggregated metagraph node info
    Info,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::from_env(),
    };

    init_logging(&format!(
        "newsgraph_client={}",
        config.observability.log_level
    ));

    tracing::info!(
        api_base_url = %config.api.base_url,
        l0_url = %config.ledger.l0_url,
        "newsgraph client starting"
    );

    match cli.command {
        Commands::Feed { page } => {
            let mut controller = AppController::new(&config)?;
            controller.start().await;
            if page != 1 {
                controller.set_page(page).await;
            }
            if let Some(error) = controller.error() {
                eprintln!("Error: {}", error);
                return Ok(());
            }
            let items: Vec<serde_json::Value> = controller
                .articles()
                .iter()
                .map(|article| {
                    serde_json::json!({
                        "id": article.id,
                        "title": article.title,
                        "summary": article.display_summary(),
                        "published_date": article.published_date,
                        "minted_by": article.minted_by,
                    })
                })
                .collect();
            print_json(&serde_json::json!({
                "page": controller.pagination().page(),
                "pages": controller.pagination().total_pages(),
                "total": controller.pagination().total(),
                "items": items,
            }))?;
        }
        Commands::All { limit } => {
            let gateway = NewsGateway::new(&config.api)?;
            let articles = gateway.fetch_all_articles(0, limit).await?;
            print_json(&articles)?;
        }
        Commands::Article { id } => {
            let gateway = NewsGateway::new(&config.api)?;
            let article = gateway.fetch_article(&id).await?;
            print_json(&article)?;
        }
        Commands::Submit { url } => {
            let gateway = NewsGateway::new(&config.api)?;
            let mut session = WalletSession::new(&config)?;
            session.initialize_network().await;
            let address = session.connect()?;
            let receipt = gateway.submit_article(&url, &address).await?;
            print_json(&receipt)?;
        }
        Commands::Mint { id } => {
            let mut controller = AppController::new(&config)?;
            controller.start().await;
            let address = controller.connect_wallet().await?;
            tracing::info!(address = %address, article_id = %id, "Minting with ephemeral wallet");
            controller.mint_article(&id).await;
            match controller.minting_error() {
                Some(error) => eprintln!("Error: {}", error),
                None => print_json(&serde_json::json!({
                    "article_id": id,
                    "state": format!("{:?}", controller.minting_state(&id)),
                    "my_items": controller.my_items(),
                }))?,
            }
        }
        Commands::MyItems => {
            let mut controller = AppController::new(&config)?;
            controller.connect_wallet().await?;
            controller.set_view(View::MyItems).await;
            print_json(&controller.my_items())?;
        }
        Commands::Balance { address } => {
            let mut session = WalletSession::new(&config)?;
            session.initialize_network().await;
            session.connect()?;
            let balance = session.get_balance(address.as_deref()).await?;
            print_json(&balance)?;
        }
        Commands::Transfer { to, amount, fee } => {
            let mut session = WalletSession::new(&config)?;
            session.initialize_network().await;
            session.connect()?;
            let receipt = session.transfer(&to, amount, fee).await?;
            print_json(&receipt)?;
        }
        Commands::Info => {
            let mut controller = AppController::new(&config)?;
            controller.set_view(View::Info).await;
            match controller.metagraph_info() {
                Some(info) => print_json(info)?,
                None => {
                    if let Some(error) = controller.error() {
                        eprintln!("Error: {}", error);
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
