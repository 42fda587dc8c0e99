use anyhow::Result;
use clap::{Parser, Subcommand};
use sr_core::{entities::*, gateways::search::SearchGateway, repositories::*};
use sr_db_sqlite::Connections;
use sr_gateways::{NoWebSearch, WebSearch};

mod cfg;

#[derive(Parser)]
#[command(name = "stream-rater", version, about = "Rate and discuss streamers")]
struct Args {
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new category
    AddCategory {
        name: String,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Create a new streamer within an existing category
    AddStreamer {
        /// Slug of the category
        category: String,
        name: String,
        #[arg(long)]
        image_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = cfg::Cfg::from_env_or_default();
    if let Some(db_url) = args.db_url {
        cfg.db_url = db_url;
    }

    log::info!("Opening database {}", cfg.db_url);
    let connections = Connections::init(&cfg.db_url, cfg.db_connection_pool_size)?;
    sr_db_sqlite::run_embedded_database_migrations(connections.exclusive().map_err(|err| {
        log::error!("Unable to get a database connection: {err}");
        err
    })?);

    match args.command {
        Some(Command::AddCategory { name, image_url }) => {
            let category = Category::new(name, image_url);
            connections.exclusive()?.create_category(&category)?;
            println!("Created category '{}' ({})", category.name, category.slug);
        }
        Some(Command::AddStreamer {
            category,
            name,
            image_url,
        }) => {
            let db = connections.exclusive()?;
            let category = db.get_category_by_slug(&category)?;
            let streamer = Streamer {
                id: Id::new(),
                category_id: category.id,
                name,
                image_url,
                views: 0,
            };
            db.create_streamer(&streamer)?;
            println!(
                "Created streamer '{}' in category '{}'",
                streamer.name, category.name
            );
        }
        None => {
            let search_gw: Box<dyn SearchGateway + Send + Sync> = match cfg.search_api_token {
                Some(token) => Box::new(WebSearch::new(token)),
                None => Box::new(NoWebSearch),
            };
            let web_cfg = sr_webserver::Cfg {
                search_result_limit: cfg.search_result_limit,
            };
            log::info!("Starting the web server");
            sr_webserver::run(connections, web_cfg, search_gw).await;
        }
    }
    Ok(())
}
