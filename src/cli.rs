use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressMode {
    /// Enable progress UI when stderr is a TTY.
    Auto,
    /// Always enable progress UI (even when piped).
    Always,
    /// Never show progress UI.
    Never,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Subreddit to collect posts from (the `name` in `/r/{name}.json`).
    #[arg(long, default_value = "ClaudeAI")]
    pub subreddit: String,

    /// Base URL of the reddit instance, used to build the listing URL and resolve permalinks.
    #[arg(long, default_value = "https://www.reddit.com")]
    pub base_url: Url,

    /// Output file for the collected records (a formatted JSON array).
    #[arg(long, default_value = "posts.json")]
    pub out: PathBuf,

    /// Pause between consecutive listing entries, in seconds.
    ///
    /// The only rate-limit concession; there is no retry or backoff.
    #[arg(long, default_value_t = 1.0)]
    pub delay: f64,

    /// HTTP User-Agent sent with every request.
    #[arg(long, default_value = "reddit-post-collect/0.1")]
    pub user_agent: String,

    /// Progress display: `auto`, `always`, or `never`.
    #[arg(long, value_enum, default_value = "auto")]
    pub progress: ProgressMode,
}
