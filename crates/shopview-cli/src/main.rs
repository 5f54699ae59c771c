use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shopview_api::CatalogClient;
use shopview_core::{load_client_config_from_env, SortAlgorithm, SortField, SortOrder};
use shopview_render::render_page;

mod browser;

use browser::ProductBrowser;

#[derive(Debug, Parser)]
#[command(name = "shopview")]
#[command(about = "Product browser client for the catalog demo API")]
struct Cli {
    /// Write the rendered page to this file instead of stdout.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Landing view: the full catalog plus stats and the trending strip.
    Browse {
        /// Server-side sort field (id, name, price, rating, popularity).
        #[arg(long, default_value = "id")]
        sort_by: SortField,
        /// Sort direction (asc, desc).
        #[arg(long, default_value = "asc")]
        order: SortOrder,
        /// Server-side sorting routine (merge, quick).
        #[arg(long)]
        algorithm: Option<SortAlgorithm>,
    },
    /// Search the catalog by name or ID, optionally sorting the results
    /// locally. With no query this clears the search and reloads the
    /// full catalog.
    Search {
        query: Option<String>,
        /// Local sort field applied to the results.
        #[arg(long)]
        sort_by: Option<SortField>,
        /// Sort direction for --sort-by (asc, desc).
        #[arg(long, default_value = "asc")]
        order: SortOrder,
    },
    /// Details view for one product, with its recommendations.
    Show { id: i64 },
    /// List the current trending products.
    Trending {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Print catalog statistics.
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = load_client_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();
    let client = CatalogClient::new(&config)?;

    match cli.command {
        Commands::Browse {
            sort_by,
            order,
            algorithm,
        } => {
            let mut browser = ProductBrowser::new(client, &config);
            browser.load_all_products().await;
            browser.load_stats().await;
            browser.load_trending().await;
            if sort_by != SortField::Id || order != SortOrder::Asc || algorithm.is_some() {
                browser.sort(sort_by, order, algorithm).await;
            }
            write_output(&render_page(&browser.page_view()), cli.out.as_deref())?;
        }
        Commands::Search {
            query,
            sort_by,
            order,
        } => {
            let mut browser = ProductBrowser::new(client, &config);
            match query {
                Some(query) => browser.search(&query).await,
                None => browser.clear().await,
            }
            if let Some(field) = sort_by {
                browser.sort(field, order, None).await;
            }
            write_output(&render_page(&browser.page_view()), cli.out.as_deref())?;
        }
        Commands::Show { id } => {
            let mut browser = ProductBrowser::new(client, &config);
            browser.load_all_products().await;
            browser.show_product_details(id).await;
            write_output(&render_page(&browser.page_view()), cli.out.as_deref())?;
        }
        Commands::Trending { limit } => {
            let limit = limit.unwrap_or(config.trending_limit);
            let trending = client.trending(limit).await?;
            if trending.is_empty() {
                println!("no trending products available");
            }
            for product in trending {
                println!(
                    "{id:>4}  {name}  ${price:.2}  rating {rating:.1}  popularity {popularity}",
                    id = product.id,
                    name = product.name,
                    price = product.price,
                    rating = product.rating,
                    popularity = product.popularity,
                );
            }
        }
        Commands::Stats => {
            let total = client.stats().await?;
            println!("total products: {total}");
        }
    }

    Ok(())
}

/// Writes the rendered page to `out`, or stdout when no path was given.
fn write_output(html: &str, out: Option<&std::path::Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, html)?;
            tracing::info!(path = %path.display(), "wrote rendered page");
        }
        None => print!("{html}"),
    }
    Ok(())
}
