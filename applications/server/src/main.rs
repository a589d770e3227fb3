/// Tune Catalog Server - music catalog backend and Deezer proxy
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tune_deezer::DeezerClient;
use tune_server::{
    api,
    config::ServerConfig,
    services::{
        accounts::{self, Registration},
        AuthService,
    },
    state::AppState,
};
use tune_storage::StorageContext;

#[derive(Parser)]
#[command(name = "tune-server")]
#[command(about = "Tune Catalog music backend", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TUNE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user (stop the server first: the users file lock is per process)
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tune_server=info,tune_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddUser {
            username,
            email,
            password,
        } => {
            add_user(&config, username, email, password).await?;
        }
        Commands::ListUsers => {
            list_users(&config).await?;
        }
    }

    Ok(())
}

async fn open_storage(config: &ServerConfig) -> anyhow::Result<StorageContext> {
    tokio::fs::create_dir_all(&config.storage.data_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create data directory {}",
                config.storage.data_dir.display()
            )
        })?;

    let storage = StorageContext::new(config.storage.paths());
    storage.initialize().await?;
    Ok(storage)
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Tune Catalog server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize storage
    let storage = Arc::new(open_storage(&config).await?);
    tracing::info!(
        "Storage initialized in {}",
        config.storage.data_dir.display()
    );

    // Initialize auth service
    let auth_service = Arc::new(AuthService::new(config.auth.bcrypt_cost));

    // Initialize Deezer client
    let deezer = Arc::new(DeezerClient::new(config.deezer.client_config())?);
    tracing::info!("Deezer proxy targeting {}", deezer.base_url());

    let app_state = AppState::new(storage, auth_service, deezer);
    let app = api::create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(
    config: &ServerConfig,
    username: String,
    email: String,
    password: String,
) -> anyhow::Result<()> {
    let storage = open_storage(config).await?;
    let auth_service = AuthService::new(config.auth.bcrypt_cost);

    let user = accounts::register(
        &storage,
        &auth_service,
        Registration {
            username: Some(username),
            email: Some(email),
            password: Some(password),
        },
    )
    .await
    .map_err(|e| anyhow::anyhow!(e.status_and_message().1))?;

    println!("Created user {} ({}) with id {}", user.username, user.email, user.id);
    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let storage = open_storage(config).await?;
    let users = tune_storage::users::get_all(storage.users()).await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} <{}>", user.id, user.username, user.email);
    }

    Ok(())
}
