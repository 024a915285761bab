//! HTTP server for the line capacity planner.

use std::env;

use line_planner::api::{AppState, create_router};
use line_planner::config::ConfigLoader;
use line_planner::logging;
use tracing::{error, info};

const DEFAULT_CONFIG_DIR: &str = "./config/plant";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() {
    logging::init();

    let config_dir =
        env::var("PLANNER_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        env::var("PLANNER_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let plant = match ConfigLoader::load(&config_dir) {
        Ok(plant) => plant,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load plant configuration");
            std::process::exit(1);
        }
    };

    let router = create_router(AppState::new(plant));

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_addr = %bind_addr, error = %err, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(bind_addr = %bind_addr, "Line planner listening");
    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server stopped");
        std::process::exit(1);
    }
}
