use crate::config::Config;
use crate::feed::{Listing, Post};
use crate::ir::{flatten, BlockSequence};

pub const NO_SELF_TEXT: &str = "No self text";
const ELLIPSIS: char = '\u{2026}';

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub key: String,
    pub title: String,
    pub url: String,
    pub score: i64,
    pub excerpt: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detail {
    pub title: String,
    pub url: String,
    pub score: i64,
    pub blocks: BlockSequence,
}

pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let cut: String = title.chars().take(max_chars).collect();
    let mut out = cut.trim().to_string();
    out.push(ELLIPSIS);
    out
}

impl Card {
    pub fn from_post(post: &Post, index: usize, config: &Config) -> Self {
        Card {
            key: post.key(index),
            title: truncate_title(&post.title, config.title_max_chars),
            url: post.url.clone(),
            score: post.score,
            excerpt: flatten(&post.blocks()),
        }
    }
}

pub fn cards(listing: &Listing, config: &Config) -> Vec<Card> {
    listing
        .posts()
        .enumerate()
        .map(|(i, post)| Card::from_post(post, i, config))
        .collect()
}

impl Detail {
    pub fn from_post(post: &Post) -> Self {
        Detail {
            title: post.title.clone(),
            url: post.url.clone(),
            score: post.score,
            blocks: post.blocks(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    detail: Option<Detail>,
}

impl Selection {
    pub fn open(&mut self, post: &Post) {
        self.detail = Some(Detail::from_post(post));
    }

    pub fn close(&mut self) {
        self.detail = None;
    }

    pub fn is_open(&self) -> bool {
        self.detail.is_some()
    }

    pub fn current(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }
}
