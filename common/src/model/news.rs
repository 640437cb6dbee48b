use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

/// URL the backend puts on sample articles; it does not point at a story.
pub const PLACEHOLDER_URL: &str = "https://newsapi.org";

/// Query shown and fetched when the news panel first mounts.
pub const DEFAULT_QUERY: &str = "social media marketing";

pub const SUGGESTED_QUERIES: [&str; 7] = [
    "social media marketing",
    "instagram trends",
    "influencer marketing",
    "digital advertising",
    "content marketing",
    "tiktok brands",
    "email marketing",
];

/// Whether results come from the live provider or the backend's sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsStatus {
    #[default]
    Live,
    Mock,
}

/// Body of `GET /api/news/?q=...`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
    #[serde(default)]
    pub status: NewsStatus,
    /// Hint attached to sample results, e.g. how to configure a key.
    #[serde(default)]
    pub message: Option<String>,
}

impl NewsResponse {
    pub fn is_mock(&self) -> bool {
        self.status == NewsStatus::Mock
    }
}

/// A headline returned by the news proxy. Any field may be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewsArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
}

impl NewsArticle {
    pub fn title_or_default(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or("No title")
    }

    pub fn source_or_default(&self) -> &str {
        non_blank(self.source.as_deref()).unwrap_or("News")
    }

    /// Link to the story, unless it is missing or the placeholder sentinel.
    pub fn link(&self) -> Option<&str> {
        non_blank(self.url.as_deref()).filter(|u| *u != PLACEHOLDER_URL)
    }

    /// Description cut to at most `max_chars` characters, with an ellipsis.
    pub fn short_description(&self, max_chars: usize) -> Option<String> {
        non_blank(self.description.as_deref()).map(|d| truncate(d, max_chars))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
