use std::net::SocketAddr;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stories")]
#[command(about = "Paginated, searchable Hacker News top stories API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the stories API over HTTP
    Serve {
        /// Address to listen on (overrides STORIES_BIND)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },

    /// Fetch one page of top stories and print it
    List {
        /// Zero-based page index
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        page_index: i64,

        /// Stories per page
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        page_size: i64,

        /// Only keep stories whose title contains this text (case-insensitive)
        #[arg(short, long)]
        title: Option<String>,

        /// Print the raw JSON response instead of a list
        #[arg(long)]
        json: bool,
    },
}
