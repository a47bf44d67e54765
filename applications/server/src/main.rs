/// Sleeve Server - album pages on their own subdomains
use clap::{Parser, Subcommand};
use sleeve_core::AlbumStore;
use sleeve_server::{
    config::ServerConfig, create_router, services::albums::delete_by_subdomain, AlbumService,
    AppState,
};
use sleeve_storage::SqliteAlbumStore;
use sleeve_uploader::{ImgbbClient, ImgbbConfig};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sleeve-server")]
#[command(about = "Sleeve album page server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./sleeve.toml when present)
    #[arg(short, long, global = true, env = "SLEEVE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// List the most recently published albums
    List {
        /// Maximum number of albums to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
    /// Print one album as JSON
    Show {
        /// Album subdomain
        subdomain: String,
    },
    /// Delete an album
    Delete {
        /// Album subdomain
        subdomain: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sleeve_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::List { limit } => list_albums(&config, limit).await?,
        Commands::Show { subdomain } => show_album(&config, &subdomain).await?,
        Commands::Delete { subdomain } => delete_album(&config, &subdomain).await?,
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting Sleeve server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Domain: {}", config.site.domain);

    let store = SqliteAlbumStore::open(&config.storage.database_url).await?;
    tracing::info!("Database connected");

    let uploader = ImgbbClient::new(
        ImgbbConfig::new(&config.uploader.endpoint, &config.uploader.api_key)
            .with_timeout(config.uploader.timeout_secs),
    )?;
    tracing::info!(endpoint = %uploader.endpoint(), "Image uploader initialized");

    let albums = Arc::new(AlbumService::new(Arc::new(store), Arc::new(uploader)));
    let app_state = AppState::new(albums, config.site.clone());
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteAlbumStore> {
    Ok(SqliteAlbumStore::open(&config.storage.database_url).await?)
}

async fn list_albums(config: &ServerConfig, limit: usize) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let albums = store.list_recent(limit).await?;

    if albums.is_empty() {
        println!("No albums published yet");
        return Ok(());
    }

    println!("Albums:");
    for album in albums {
        println!(
            "  {:<30}  {} - {}  ({})",
            album.subdomain,
            album.artist_name,
            album.album_name,
            album.created_at.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}

async fn show_album(config: &ServerConfig, subdomain: &str) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    match store.get_by_subdomain(subdomain).await? {
        Some(album) => println!("{}", serde_json::to_string_pretty(&album)?),
        None => anyhow::bail!("No album with subdomain '{}'", subdomain),
    }

    Ok(())
}

async fn delete_album(config: &ServerConfig, subdomain: &str) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let id = delete_by_subdomain(&store, subdomain).await?;
    println!("Deleted album {} ({})", subdomain, id);
    Ok(())
}
