use crate::ir::BlockSequence;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub const LOAD_FAILED: &str = "Failed to load feed";

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("cannot read feed at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid feed JSON: {source}")]
    Parse { source: serde_json::Error },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub data: ListingData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<PostWrapper>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostWrapper {
    pub data: Post,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub selftext_html: Option<String>,
}

impl Listing {
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.data.children.iter().map(|c| &c.data)
    }

    pub fn find(&self, key: &str) -> Option<&Post> {
        self.posts()
            .find(|p| p.id.as_deref() == Some(key))
            .or_else(|| key.parse::<usize>().ok().and_then(|i| self.posts().nth(i)))
    }
}

impl Post {
    pub fn key(&self, index: usize) -> String {
        self.id.clone().unwrap_or_else(|| index.to_string())
    }

    /// Parse the self-text into blocks. The feed escapes its markup twice, so
    /// one decode happens here and another inside the block extraction.
    pub fn blocks(&self) -> BlockSequence {
        crate::parse(self.selftext_html.as_deref())
    }
}

pub fn parse_listing(json: &str) -> Result<Listing, FeedError> {
    serde_json::from_str(json).map_err(|source| FeedError::Parse { source })
}

pub fn load_feed(path: &Path) -> Result<Listing, FeedError> {
    let text = std::fs::read_to_string(path).map_err(|source| FeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_listing(&text)
}

#[derive(Debug, Clone, Default)]
pub enum FeedState {
    #[default]
    Loading,
    Ready(Listing),
    Failed(String),
}

impl FeedState {
    pub fn from_result(result: Result<Listing, FeedError>) -> Self {
        match result {
            Ok(listing) => FeedState::Ready(listing),
            Err(e) => {
                log::error!("{}", e);
                FeedState::Failed(LOAD_FAILED.to_string())
            }
        }
    }
}

/// A single best-effort feed load. Clones share one cancel flag, so whoever
/// tears the consumer down can cancel while the load runs; the result is then
/// dropped instead of reaching the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct FeedLoad {
    cancelled: Arc<AtomicBool>,
}

impl FeedLoad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn finish(&self, result: Result<Listing, FeedError>) -> Option<FeedState> {
        if self.is_cancelled() {
            log::debug!("feed load cancelled, discarding result");
            return None;
        }
        Some(FeedState::from_result(result))
    }

    pub fn run(&self, path: &Path) -> Option<FeedState> {
        if self.is_cancelled() {
            return None;
        }
        self.finish(load_feed(path))
    }
}
