//! Command-line and environment configuration for the server binary.

use clap::Parser;
use std::net::SocketAddr;

/// Default HTTP bind address
pub const BIND_ADDRESS_DEFAULT: &str = "127.0.0.1:3000";

/// Default capacity of the cat actor's request channel
pub const BUFFER_SIZE_DEFAULT: usize = 32;

/// Serves the `/cats` resource over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(name = "cat-service")]
#[command(version)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    #[arg(short, long, env = "CATS_BIND", default_value = BIND_ADDRESS_DEFAULT)]
    pub bind: SocketAddr,

    /// Request channel capacity of the cat actor
    #[arg(long, env = "CATS_BUFFER_SIZE", default_value_t = BUFFER_SIZE_DEFAULT)]
    pub buffer_size: usize,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the route table and exit
    #[arg(long)]
    pub routes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["cat-service"]).unwrap();
        assert_eq!(config.bind, BIND_ADDRESS_DEFAULT.parse::<SocketAddr>().unwrap());
        assert_eq!(config.buffer_size, BUFFER_SIZE_DEFAULT);
        assert_eq!(config.verbose, 0);
        assert!(!config.routes);
    }

    #[test]
    fn test_flags() {
        let config = ServerConfig::try_parse_from([
            "cat-service",
            "--bind",
            "0.0.0.0:8080",
            "--buffer-size",
            "4",
            "-vv",
            "--routes",
        ])
        .unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.buffer_size, 4);
        assert_eq!(config.verbose, 2);
        assert!(config.routes);
    }

    #[test]
    fn test_rejects_invalid_bind_address() {
        assert!(ServerConfig::try_parse_from(["cat-service", "--bind", "not-an-addr"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        ServerConfig::command().debug_assert();
    }
}
