pub mod routes;
pub mod shared;
pub mod system;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let addr = config.server.socket_addr()?;
    let dist_dir = config.server.resolve_dist_dir();

    if !dist_dir.join("index.html").exists() {
        tracing::warn!(
            "index.html not found in {}, run `trunk build` in crates/frontend first",
            dist_dir.display()
        );
    }
    tracing::info!("Serving SPA from {}", dist_dir.display());

    let app = routes::build_router(&dist_dir);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Error: Port {} is already in use.", addr.port());
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
