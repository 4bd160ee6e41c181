//! Command-line arguments.

use clap::Parser;
use std::time::Duration;

/// Register a user on a Synapse homeserver via the shared-secret admin API.
#[derive(Parser, Debug)]
#[command(name = "synapse-register", version, about)]
pub struct Cli {
    /// Homeserver URL, e.g. https://matrix.example.org
    #[arg(long)]
    pub homeserver: String,

    /// Registration shared secret from the homeserver config
    #[arg(long)]
    pub secret: String,

    /// Username for the new account
    #[arg(long)]
    pub username: String,

    /// Password for the new account
    #[arg(long)]
    pub password: String,

    /// Display name for the new account, e.g. 'Michael Bolton'
    #[arg(long)]
    pub display_name: String,

    /// Grant the new account server admin privileges
    #[arg(long)]
    pub admin: bool,

    /// Timeout in seconds for each request to the homeserver
    #[arg(long = "timeout", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Vec<&'static str> {
        vec![
            "synapse-register",
            "--homeserver",
            "https://matrix.example.org",
            "--secret",
            "s3cr3t",
            "--username",
            "alice",
            "--password",
            "hunter2",
            "--display-name",
            "Alice",
        ]
    }

    #[test]
    fn parses_required_args() {
        let cli = Cli::try_parse_from(base_args()).unwrap();
        assert_eq!(cli.homeserver, "https://matrix.example.org");
        assert_eq!(cli.username, "alice");
        assert_eq!(cli.display_name, "Alice");
        assert!(!cli.admin);
        assert_eq!(cli.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn rejects_missing_required_arg() {
        let mut args = base_args();
        // Drop --display-name and its value
        args.truncate(args.len() - 2);
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn parses_admin_and_timeout() {
        let mut args = base_args();
        args.extend(["--admin", "--timeout", "5"]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.admin);
        assert_eq!(cli.timeout(), Duration::from_secs(5));
    }
}
