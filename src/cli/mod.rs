//! CLI module for the user admission API
//!
//! - `serve`: run the HTTP API

pub mod serve;

use clap::{Parser, Subcommand};

/// User admission API - registers users with tier-based valuation
#[derive(Parser)]
#[command(name = "user-admission-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["user-admission-api", "serve"]).unwrap();
        let Command::Serve(args) = cli.command;

        assert!(args.host.is_none());
        assert!(args.port.is_none());
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "user-admission-api",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "3000",
        ])
        .unwrap();
        let Command::Serve(args) = cli.command;

        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(3000));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["user-admission-api"]).is_err());
    }
}
