//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ____  _ __    ___       __
   / __ )(_) /_  / (_)___  / /____  _________ _
  / __  / / __ \/ / / __ \/ __/ _ \/ ___/ __ `/
 / /_/ / / /_/ / / / /_/ / /_/  __/ /__/ /_/ /
/_____/_/_.___/_/_/\____/\__/\___/\___/\__,_/

    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(host: &str, port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}:{}/api", host, port);
    info!("Health:    http://{}:{}/health", host, port);
    info!("API Docs:  http://{}:{}/swagger-ui", host, port);
    info!("{}", separator);
}
