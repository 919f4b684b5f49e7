use serde::Deserialize;
use url::Url;

/// Title substituted when an entry has no usable `title` field.
pub const PLACEHOLDER_TITLE: &str = "No title";

#[derive(Debug, Deserialize)]
pub struct ListingPage {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<ListingEntry>,
}

/// One raw entry of the listing. Reddit nests the useful fields under `data`;
/// everything is optional so a malformed entry decodes instead of failing the run.
#[derive(Debug, Deserialize)]
pub struct ListingEntry {
    #[serde(default)]
    pub data: Option<EntryData>,
}

#[derive(Debug, Deserialize)]
pub struct EntryData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
}

/// Title and absolute permalink pulled out of one listing entry.
/// An empty `link` marks an entry that cannot be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub title: String,
    pub link: String,
}

impl ListingEntry {
    pub fn extract(&self, base_url: &Url) -> ExtractedEntry {
        let Some(data) = &self.data else {
            return ExtractedEntry {
                title: PLACEHOLDER_TITLE.to_string(),
                link: String::new(),
            };
        };

        let title = data
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());

        let link = match data.permalink.as_deref() {
            Some(p) if !p.is_empty() => base_url
                .join(p)
                .map(|u| u.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };

        ExtractedEntry { title, link }
    }
}
