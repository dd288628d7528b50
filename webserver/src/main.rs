//! Course cart entry point
//!
//! Loads settings and the catalog, then serves the cart until Ctrl+C.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shared::{Component, cart_info, logging};

use course_cart::{CliOverrides, JsonCatalogProvider, Settings, WebServer};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "course-cart")]
#[command(about = "Browse a course catalog, fill a cart and check out")]
struct Args {
    /// Port for HTTP server (browser connections); keeps the configured host
    #[arg(long)]
    port: Option<u16>,

    /// Host to bind; keeps the configured port
    #[arg(long = "bind", alias = "host")]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Course catalog JSON file (defaults to the bundled catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Maximum number of courses in the cart
    #[arg(long)]
    max_items: Option<usize>,

    /// Static files directory
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            host: self.bind.clone(),
            port: self.port,
            catalog_path: self.catalog.clone(),
            max_items: self.max_items,
            static_dir: self.static_dir.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // .env is optional
    dotenv::dotenv().ok();

    logging::init_tracing(Some(&args.log_level));

    let settings = Settings::load(args.config.as_deref(), args.overrides())
        .context("failed to load settings")?;
    let addr = settings.socket_addr()?;

    cart_info!(
        Component::Server,
        "🚀 Starting course cart (max {} courses, static assets in {})",
        settings.max_items,
        settings.static_dir.display()
    );

    let provider = JsonCatalogProvider::from_optional_path(settings.catalog_path.as_deref());
    let webserver = WebServer::from_provider(&provider, settings.max_items, &settings.static_dir)
        .await
        .context("failed to load course catalog")?;

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown(Component::Server, "Received Ctrl+C signal"),
            Err(err) => logging::log_error(Component::Server, "Signal handling", &err),
        }
    };

    webserver.run(addr, shutdown).await?;

    logging::log_success(Component::Server, "Course cart stopped gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_for(args: &[&str]) -> Settings {
        let args = Args::parse_from(std::iter::once("course-cart").chain(args.iter().copied()));
        let mut settings = Settings::default();
        settings.apply_cli(args.overrides());
        settings
    }

    #[test]
    fn test_bind_flag_alone_is_applied() {
        assert_eq!(settings_for(&["--bind", "0.0.0.0"]).bind_addr, "0.0.0.0:8080");
        assert_eq!(settings_for(&["--host", "0.0.0.0"]).bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_port_flag_alone_keeps_host() {
        let args = Args::parse_from(["course-cart", "--port", "8081"]);
        let mut settings = Settings {
            bind_addr: "0.0.0.0:9000".into(),
            ..Settings::default()
        };
        settings.apply_cli(args.overrides());
        assert_eq!(settings.bind_addr, "0.0.0.0:8081");
    }

    #[test]
    fn test_no_flags_leave_defaults() {
        let settings = settings_for(&[]);
        assert_eq!(settings, Settings::default());
    }
}
