mod cli;
mod collector;
mod fetcher;
mod listing;
mod progress;

use std::time::Duration;

use cli::Args;
use collector::Collector;
use fetcher::Fetcher;

pub use cli::ProgressMode;
pub use cli::Args as CliArgs;
pub use collector::{PostRecord, Summary, SummaryEntry, save, summarize};

pub async fn run(args: Args) -> anyhow::Result<()> {
    use std::io::IsTerminal as _;

    let progress_enabled = match args.progress {
        ProgressMode::Always => true,
        ProgressMode::Never => false,
        ProgressMode::Auto => std::io::stderr().is_terminal(),
    };
    let progress = progress::Progress::new(progress_enabled);

    let fetcher = Fetcher::new(&args.user_agent)?;
    let collector = Collector::new(
        fetcher,
        args.base_url.clone(),
        args.subreddit.clone(),
        progress,
    );

    let delay = Duration::from_secs_f64(args.delay.max(0.0));
    let records = collector.run(delay).await;

    if let Err(err) = collector::save(&records, &args.out) {
        tracing::error!("failed to save records: {err:#}");
    } else {
        tracing::info!(path = %args.out.display(), count = records.len(), "records saved");
    }

    print_summary(&collector::summarize(&records));
    Ok(())
}

fn print_summary(summary: &Summary) {
    println!();
    println!("--- summary ---");
    println!("total posts collected: {}", summary.total_posts);
    if summary.posts.is_empty() {
        return;
    }

    println!();
    println!("first {} posts:", summary.posts.len().min(5));
    for (i, post) in summary.posts.iter().take(5).enumerate() {
        println!("{}. {}", i + 1, truncate(&post.title, 60));
        println!("   link: {}", post.link);
        println!("   detail loaded: {}", post.has_detail);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    }
}
