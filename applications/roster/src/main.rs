/// Roster - browse characters from the public catalog
use clap::Parser;
use roster::{config::RosterConfig, shell};
use roster_catalog::CatalogClient;
use roster_list::{CharacterListController, FetchStrategy};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse characters from the catalog", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog base URL (overrides configuration)
    #[arg(long)]
    base_url: Option<String>,

    /// Number of characters to load, starting at id 1
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// Fetch all ids at once instead of one at a time
    #[arg(long)]
    concurrent: bool,

    /// Print the loaded list as JSON and exit
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn apply(&self, config: &mut RosterConfig) {
        if let Some(base_url) = &self.base_url {
            config.catalog.base_url = base_url.clone();
        }
        if let Some(count) = self.count {
            config.list.count = count;
        }
        if self.concurrent {
            config.list.strategy = FetchStrategy::Concurrent;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the rendered list owns stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=info,roster_list=info,roster_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = RosterConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    tracing::info!("Catalog: {}", config.catalog.base_url);

    let client = CatalogClient::new(config.catalog_config())?;
    let (controller, handle) =
        CharacterListController::start(Arc::new(client), config.list_options());

    let mut stdout = tokio::io::stdout();

    if cli.json {
        shell::run_json(handle, &mut stdout).await?;
    } else {
        let stdin = BufReader::new(tokio::io::stdin());
        shell::run(&controller, handle, stdin, &mut stdout).await?;
    }

    Ok(())
}
