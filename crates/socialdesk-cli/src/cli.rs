//! Command line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use socialdesk_core::models::Platform;

#[derive(Parser)]
#[command(name = "socialdesk")]
#[command(version)]
#[command(about = "Manage scheduled posts, accounts and inbox from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API root, e.g. https://api.example.com/api/v1
    #[arg(long, global = true, env = "SOCIALDESK_API_URL")]
    pub api_url: Option<String>,

    /// Keep tokens in memory only for this run
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Print raw JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(short, long, env = "SOCIALDESK_EMAIL")]
        email: Option<String>,
    },

    /// Sign out and forget stored tokens
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Scheduled and published posts
    Posts {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// Connected social accounts
    Accounts {
        #[command(subcommand)]
        command: AccountCommands,
    },

    /// Engagement dashboard
    Analytics {
        /// Window in days (1-365)
        #[arg(short, long, default_value_t = 30)]
        days: u32,
    },

    /// Comments, mentions and direct messages
    Inbox {
        #[command(subcommand)]
        command: InboxCommands,
    },

    /// Link-in-bio pages
    Bio {
        #[command(subcommand)]
        command: BioCommands,
    },

    /// Content categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// Schedule many posts from a CSV file
    Bulk {
        #[command(subcommand)]
        command: BulkCommands,
    },
}

#[derive(Subcommand)]
pub enum PostCommands {
    List {
        /// draft, scheduled, published or failed
        #[arg(short, long)]
        status: Option<String>,
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    Show {
        id: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum AccountCommands {
    List,
    /// Print the OAuth URL that links a new account
    Connect {
        platform: Platform,
    },
    Disconnect {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum InboxCommands {
    List {
        #[arg(short, long)]
        unread: bool,
        #[arg(short, long)]
        platform: Option<String>,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Mark one message read, or all of them with --all
    Read {
        #[arg(required_unless_present = "all")]
        id: Option<String>,
        #[arg(long)]
        all: bool,
        /// Restrict --all to one platform
        #[arg(short, long, requires = "all")]
        platform: Option<String>,
    },
    Reply {
        id: String,
        text: String,
    },
    Counts,
}

#[derive(Subcommand)]
pub enum BioCommands {
    List,
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    List,
}

#[derive(Subcommand)]
pub enum BulkCommands {
    /// Download the CSV template
    Template {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a CSV and show the per-row preview
    Upload {
        file: PathBuf,
    },
    /// Create posts from a JSON array of entries
    Confirm {
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_nested_commands() {
        let cli = Cli::try_parse_from(["socialdesk", "--json", "posts", "list", "--status", "scheduled"]).unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::Posts { command: PostCommands::List { status: Some(ref s), .. } } if s == "scheduled"
        ));

        let cli = Cli::try_parse_from(["socialdesk", "accounts", "connect", "instagram"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Accounts { command: AccountCommands::Connect { platform: Platform::Meta } }
        ));
    }

    #[test]
    fn test_inbox_read_needs_id_or_all() {
        assert!(Cli::try_parse_from(["socialdesk", "inbox", "read"]).is_err());
        assert!(Cli::try_parse_from(["socialdesk", "inbox", "read", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["socialdesk", "inbox", "read", "m-1"]).is_ok());
    }
}
