pub mod config;
pub mod emit;
pub mod entities;
pub mod feed;
pub mod ir;
pub mod reduce;
pub mod reflow;
pub mod segment;
pub mod view;

pub use ir::{Block, BlockSequence};

pub fn parse(selftext_html: Option<&str>) -> BlockSequence {
    match selftext_html {
        Some(html) if !html.is_empty() => segment::parse_blocks(&entities::decode_entities(html)),
        _ => Vec::new(),
    }
}
