use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::fetcher::Fetcher;
use crate::listing::ListingPage;
use crate::progress::Progress;

/// One collected post: title, detail URL (with the `.json` suffix), and the
/// raw decoded detail payload, `None` when that fetch failed.
#[derive(Debug, Serialize)]
pub struct PostRecord {
    pub title: String,
    pub link: String,
    pub detail: Option<Value>,
}

#[derive(Debug)]
pub struct Summary {
    pub total_posts: usize,
    pub posts: Vec<SummaryEntry>,
}

#[derive(Debug)]
pub struct SummaryEntry {
    pub title: String,
    pub link: String,
    pub has_detail: bool,
}

pub struct Collector {
    fetcher: Fetcher,
    base_url: Url,
    subreddit: String,
    progress: Progress,
}

impl Collector {
    pub fn new(fetcher: Fetcher, base_url: Url, subreddit: String, progress: Progress) -> Self {
        Self {
            fetcher,
            base_url,
            subreddit,
            progress,
        }
    }

    /// Fetch the listing, then each post's detail in listing order, pausing
    /// `delay` between consecutive entries. A failed listing fetch yields an
    /// empty vec; per-entry failures degrade and the run continues.
    pub async fn run(&self, delay: Duration) -> Vec<PostRecord> {
        tracing::info!(subreddit = %self.subreddit, "fetching listing");
        let Some(listing) = self.fetch_listing().await else {
            self.progress.finish();
            return Vec::new();
        };

        let entries = listing.data.children;
        let total = entries.len();
        tracing::info!(total, "listing fetched");
        self.progress.set_total(total);

        let mut records = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let extracted = entry.extract(&self.base_url);
            if extracted.link.is_empty() {
                tracing::warn!(index = i + 1, total, "skipped entry with no permalink");
                self.progress.entry_done(&extracted.title);
                continue;
            }

            let detail = self.fetch_detail(&extracted.link).await;
            tracing::info!(
                index = i + 1,
                total,
                title = %extracted.title,
                has_detail = detail.is_some(),
                "added post"
            );
            self.progress.entry_done(&extracted.title);
            records.push(PostRecord {
                title: extracted.title,
                link: format!("{}.json", extracted.link),
                detail,
            });
        }

        self.progress.finish();
        records
    }

    async fn fetch_listing(&self) -> Option<ListingPage> {
        match self.try_fetch_listing().await {
            Ok(page) => Some(page),
            Err(err) => {
                tracing::error!("listing fetch failed: {err:#}");
                None
            }
        }
    }

    async fn try_fetch_listing(&self) -> anyhow::Result<ListingPage> {
        let url = self
            .base_url
            .join(&format!("r/{}.json", self.subreddit))
            .context("build listing url")?;
        let value = self.fetcher.get_json(url).await?;
        serde_json::from_value(value).context("parse listing payload")
    }

    async fn fetch_detail(&self, link: &str) -> Option<Value> {
        match self.try_fetch_detail(link).await {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("detail fetch failed for {link}: {err:#}");
                None
            }
        }
    }

    async fn try_fetch_detail(&self, link: &str) -> anyhow::Result<Value> {
        let url = Url::parse(&format!("{link}.json"))
            .with_context(|| format!("build detail url from {link}"))?;
        self.fetcher.get_json(url).await
    }
}

/// Write the full record sequence as formatted JSON. An empty run still
/// produces a file containing an empty array.
pub fn save(records: &[PostRecord], path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(records).context("serialize records")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn summarize(records: &[PostRecord]) -> Summary {
    Summary {
        total_posts: records.len(),
        posts: records
            .iter()
            .map(|r| SummaryEntry {
                title: r.title.clone(),
                link: r.link.clone(),
                has_detail: r.detail.is_some(),
            })
            .collect(),
    }
}
