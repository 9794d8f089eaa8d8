//! Command-line surface.

#[cfg(test)]
#[path = "args_test.rs"]
mod args_test;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser, Debug)]
#[command(name = "devevents", about = "DEV Events command-line client")]
pub struct Cli {
    #[arg(long, env = "DEVEVENTS_API_URL", default_value = DEFAULT_API_URL)]
    pub base_url: String,

    /// Where the session is kept. Defaults to ~/.devevents/session.json.
    #[arg(long, env = "DEVEVENTS_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Login(LoginArgs),
    Register(RegisterArgs),
    Logout,
    /// Print the signed-in user, or null.
    Whoami {
        /// Fail instead of printing null when the session is missing or invalid.
        #[arg(long)]
        strict: bool,
    },
    #[command(subcommand)]
    Events(EventsCommand),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "DEVEVENTS_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "DEVEVENTS_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Defaults to --password.
    #[arg(long)]
    pub password_confirmation: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum EventsCommand {
    /// Events owned by the signed-in user.
    List,
    /// Public listing, optionally filtered.
    Public {
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        id: u64,
        /// Use the unauthenticated endpoint.
        #[arg(long)]
        public: bool,
    },
    Create(EventArgs),
    Update {
        id: u64,
        #[command(flatten)]
        fields: EventArgs,
    },
    Delete {
        id: u64,
    },
    Participants {
        id: u64,
        #[arg(long)]
        public: bool,
    },
    Join {
        id: u64,
    },
    Leave {
        id: u64,
    },
    /// Start a payment and print the provider URL.
    Checkout {
        id: u64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Visibility {
    Public,
    Private,
}

/// Event fields. On update, only the flags given replace existing values.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct EventArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// `YYYY-MM-DD`.
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long, value_enum)]
    pub visibility: Option<Visibility>,
    /// Ticket price; empty or 0 for a free event.
    #[arg(long)]
    pub price: Option<String>,
    /// Included item; repeat for several. Replaces the existing list.
    #[arg(long = "item")]
    pub items: Vec<String>,
    /// Banner image file.
    #[arg(long)]
    pub image: Option<PathBuf>,
}
