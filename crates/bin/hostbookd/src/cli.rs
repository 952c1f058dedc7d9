//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hostbookd")]
#[command(about = "Serve or render the machine inventory page.")]
pub struct CommandLine {
    /// Configuration file (defaults to `hostbook.toml` when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Serve the page and the JSON API over HTTP
    #[command(alias = "s")]
    Serve,
    /// Render the page once to a file or stdout
    #[command(alias = "r")]
    Render {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load and validate the content, then print a summary
    #[command(alias = "c")]
    Check,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command, `serve` when none was given.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_serve() {
        let cli = CommandLine::try_parse_from(["hostbookd"]).unwrap();
        assert_eq!(cli.command(), Commands::Serve);
        assert!(cli.config.is_none());
    }

    #[test]
    fn should_parse_render_with_output() {
        let cli =
            CommandLine::try_parse_from(["hostbookd", "render", "--output", "inventory.html"])
                .unwrap();
        assert_eq!(
            cli.command(),
            Commands::Render {
                output: Some(PathBuf::from("inventory.html")),
            }
        );
    }

    #[test]
    fn should_accept_config_after_subcommand() {
        let cli =
            CommandLine::try_parse_from(["hostbookd", "check", "--config", "lab.toml"]).unwrap();
        assert_eq!(cli.command(), Commands::Check);
        assert_eq!(cli.config, Some(PathBuf::from("lab.toml")));
    }

    #[test]
    fn should_reject_unknown_subcommand() {
        assert!(CommandLine::try_parse_from(["hostbookd", "deploy"]).is_err());
    }
}
