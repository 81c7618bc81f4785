use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use fruitjar::catalog::{
    filter_fruits, group_fruits, groups_to_json, CatalogService, CatalogSummary, GroupBy,
    HttpCatalogSource,
};
use fruitjar::config::Config;
use fruitjar::logging;
use fruitjar::proxy::{ProxyServer, API_KEY_HEADER};

#[derive(Debug, Parser)]
#[command(name = "fruitjar", version, about = "Browse fruit nutrition data and fill a jar")]
struct Cli {
    /// Config file (default: ~/.config/fruitjar/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the catalog proxy
    Serve {
        /// Bind address, overrides proxy.bind_addr
        #[arg(long)]
        bind: Option<String>,
    },
    /// Interactive terminal browser
    Browse {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the catalog
    List {
        #[command(flatten)]
        source: SourceArgs,
        /// Only fruits whose name, family, order or genus contains this
        #[arg(long, short, default_value = "")]
        query: String,
        /// none, family, order or genus
        #[arg(long, short, default_value = "none")]
        group_by: GroupBy,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, clap::Args)]
struct SourceArgs {
    /// Catalog URL, overrides catalog.endpoint
    #[arg(long)]
    endpoint: Option<String>,
    /// Fetch from the upstream API directly instead of the local proxy
    #[arg(long, conflicts_with = "endpoint")]
    direct: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    match cli.command {
        Command::Serve { bind } => {
            logging::init_tracing();
            runtime.block_on(serve(config, bind))
        }
        Command::Browse { source } => {
            let log_path = logging::default_log_path();
            logging::init_file_tracing(&log_path)
                .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
            let service = Arc::new(catalog_service(&config, &source)?);
            fruitjar::ui::run(service, config.stale_time(), runtime.handle().clone())
        }
        Command::List {
            source,
            query,
            group_by,
            json,
        } => {
            logging::init_tracing();
            let service = catalog_service(&config, &source)?;
            let fruits = runtime.block_on(service.catalog())?;
            print_catalog(&fruits, &query, group_by, json)
        }
    }
}

async fn serve(mut config: Config, bind: Option<String>) -> anyhow::Result<()> {
    if let Some(bind) = bind {
        config.proxy.bind_addr = bind;
        config.validate()?;
    }
    let mut server = ProxyServer::new(&config)?;
    server.try_bind().await?;
    server.run().await?;
    Ok(())
}

fn catalog_service(
    config: &Config,
    args: &SourceArgs,
) -> anyhow::Result<CatalogService<HttpCatalogSource>> {
    let source = if args.direct {
        HttpCatalogSource::new(
            config.upstream.fruits_url(),
            config.connect_timeout(),
            config.request_timeout(),
        )?
        .with_header(API_KEY_HEADER, &config.upstream.api_key)
        .with_header("origin", &config.upstream.default_origin)
    } else {
        let endpoint = args.endpoint.as_deref().unwrap_or(&config.catalog.endpoint);
        HttpCatalogSource::new(endpoint, config.connect_timeout(), config.request_timeout())?
    };
    tracing::debug!(endpoint = source.endpoint(), "Using catalog source");

    Ok(CatalogService::new(
        source,
        config.retry_policy(),
        config.stale_time(),
    ))
}

fn print_catalog(
    fruits: &[fruitjar::catalog::Fruit],
    query: &str,
    group_by: GroupBy,
    json: bool,
) -> anyhow::Result<()> {
    let visible = filter_fruits(fruits, query);
    let groups = group_fruits(&visible, group_by);

    if json {
        let object = groups_to_json(&groups)?;
        println!("{}", serde_json::to_string_pretty(&object)?);
        return Ok(());
    }

    println!("{}", CatalogSummary::new(visible.len(), fruits.len(), query));
    for group in &groups {
        if group_by != GroupBy::None {
            println!("\n{} ({})", group.name, group.fruits.len());
        }
        for fruit in &group.fruits {
            println!(
                "  {:<20} {:<16} {:<14} {:<14} {:>6} cal",
                fruit.name,
                fruit.family,
                fruit.order,
                fruit.genus,
                fruit.nutritions.calories
            );
        }
    }
    Ok(())
}
