//! HTTP server binary for the matrícula existence probe
//!
//! Starts an HTTP server exposing the probe endpoint.
//!
//! # Usage
//!
//! ```bash
//! matricula-probe-server --port 3000 --host 0.0.0.0
//! ```
//!
//! # API Endpoints
//!
//! - `POST /existeMatricula`: Probe a matrícula for existence
//! - `GET /ping`: Health check endpoint

use clap::Parser;

/// HTTP server for the matrícula existence probe
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "::")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    // Load configuration
    let settings = match matricula_probe::Settings::from_env() {
        Ok(mut settings) => {
            // Override with CLI arguments
            settings.server.host = cli.host.clone();
            settings.server.port = cli.port;
            settings
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load settings from environment: {}. Using defaults.",
                e
            );
            let mut settings = matricula_probe::Settings::default();
            settings.server.host = cli.host.clone();
            settings.server.port = cli.port;
            settings
        }
    };

    tracing::info!(
        "Starting matrícula probe server v{}, portal {}",
        matricula_probe::utils::version::get_version(),
        settings.portal.base_url
    );

    // Create the Axum application
    let app = matricula_probe::server::app::create_app(settings.clone())?;

    let addr = parse_and_bind_address(&cli.host, cli.port).await?;

    tracing::info!(
        "Matrícula probe server v{} listening on {}",
        matricula_probe::utils::version::get_version(),
        addr
    );

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Parse host string and attempt to bind to the address
///
/// Tries IPv6 any (`::`) first and falls back to IPv4 (`0.0.0.0`) when the
/// host has no IPv6 support.
pub async fn parse_and_bind_address(host: &str, port: u16) -> anyhow::Result<std::net::SocketAddr> {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

    // Try to parse as IP address first
    if let Ok(ip) = host.parse::<IpAddr>() {
        let addr = SocketAddr::new(ip, port);
        tracing::debug!("Parsed address: {}", addr);
        return Ok(addr);
    }

    match host {
        "::" => {
            let addr = SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), port);
            tracing::debug!("Using IPv6 any address: {}", addr);

            // Test if we can bind to IPv6
            match tokio::net::TcpListener::bind(addr).await {
                Ok(_) => {
                    tracing::info!("Successfully bound to IPv6 address {}", addr);
                    Ok(addr)
                }
                Err(e) => {
                    tracing::warn!(
                        "Could not listen on [::]:{} (Caused by {}), falling back to 0.0.0.0",
                        port,
                        e
                    );
                    let fallback_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
                    tracing::info!("Using IPv4 fallback address: {}", fallback_addr);
                    Ok(fallback_addr)
                }
            }
        }
        "0.0.0.0" => {
            let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
            tracing::info!("Using IPv4 any address: {}", addr);
            Ok(addr)
        }
        _ => {
            anyhow::bail!(
                "Invalid host address: {}. Use '::' for IPv6 or '0.0.0.0' for IPv4",
                host
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parse_and_bind_ipv4_address() {
        let result = parse_and_bind_address("127.0.0.1", 0).await;
        assert!(result.is_ok());

        let addr = result.unwrap();
        assert_eq!(
            addr.ip(),
            std::net::IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
        );
    }

    #[tokio::test]
    async fn test_parse_and_bind_ipv6_any_fallback() {
        // IPv6 any should work or fall back to IPv4
        let result = parse_and_bind_address("::", 0).await;
        assert!(result.is_ok());

        let addr = result.unwrap();
        assert!(
            addr.ip() == std::net::IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
                || addr.ip() == std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
        );
    }

    #[tokio::test]
    async fn test_parse_and_bind_invalid_address() {
        let result = parse_and_bind_address("invalid-host", 8080).await;
        assert!(result.is_err());

        let error = result.unwrap_err();
        assert!(
            error
                .to_string()
                .contains("Invalid host address: invalid-host")
        );
    }

    #[test]
    fn test_cli_default_values() {
        use clap::Parser;

        let cli = Cli::parse_from(&["matricula-probe-server"]);
        assert_eq!(cli.port, 3000);
        assert_eq!(cli.host, "::");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_custom_values() {
        use clap::Parser;

        let cli = Cli::parse_from(&[
            "matricula-probe-server",
            "--port",
            "8080",
            "--host",
            "0.0.0.0",
            "--verbose",
        ]);
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.host, "0.0.0.0");
        assert!(cli.verbose);
    }
}
