use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use fleet_management::config::EnvironmentConfig;
use fleet_management::database::DatabaseConnection;
use fleet_management::models::Table;
use fleet_management::routes::create_router;
use fleet_management::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚚 Car Fleet Management Database");
    info!("================================");
    info!("Environment: {}", config.environment);

    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Failed to open the database: {}", e);
            return Err(anyhow::anyhow!("Database error: {}", e));
        }
    };

    if config.is_production() && config.cors_origins.is_empty() {
        warn!("CORS_ORIGINS is empty; any origin may call the API");
    }

    let server_url = config.server_url();
    let addr: SocketAddr = server_url.parse()?;

    let app = create_router(AppState::new(db_connection.pool().clone(), config));

    info!("🌐 Server listening on http://{}", server_url);
    info!("🔍 Screens:");
    for table in Table::ALL {
        info!(
            "   /{slug}  /{slug}/add  /{slug}/delete  /{slug}/search",
            slug = table.slug()
        );
    }
    info!("📡 JSON API:");
    info!("   GET    /health - Health check");
    info!("   GET    /api/<table> - List rows");
    info!("   POST   /api/<table> - Insert a row");
    info!("   DELETE /api/<table>?... - Delete matching rows");
    info!("   GET    /api/<table>/search?... - Search rows");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db_connection.close().await;

    if let Err(e) = served {
        error!("❌ Server stopped with an error: {}", e);
        return Err(e.into());
    }

    info!("👋 Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
