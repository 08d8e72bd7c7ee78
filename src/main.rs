use chrono::Local;
use habit_calendar::{load_data, remote::HttpRemote, router, session::ViewSession, AppState, Config};
use std::net::SocketAddr;
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let data = load_data(&config.data_path).await.map_err(|err| {
        error!("refusing to start with {}: {err}", config.data_path.display());
        err
    })?;
    let remote = HttpRemote::new(config.api_url.clone())?;
    info!("calendar reads habits from {}", remote.base_url());
    let view = ViewSession::new(remote, config.app_start, Local::now().date_naive());
    let state = AppState::new(config.data_path.clone(), data, view);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // The view may be pointed at this same process, so the first load can
    // only start once the listener exists.
    let startup_view = state.view.clone();
    tokio::spawn(async move {
        startup_view.lock().await.load().await;
    });

    axum::serve(listener, router(state)).await?;

    Ok(())
}
