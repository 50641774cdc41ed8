use crate::entities::decode_entities;
use crate::ir::{Block, BlockSequence};
use crate::reduce::html_to_plain_text;
use crate::reflow::normalize_code;
use regex::Regex;
use std::sync::LazyLock;

static RE_DIV: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?div[^>]*>").unwrap());
static RE_CODE_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<pre[^>]*>\s*<code[^>]*>((?s:.*?))</code>\s*</pre>").unwrap()
});
static RE_ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

fn push_text(blocks: &mut BlockSequence, markup: &str) {
    let text = html_to_plain_text(markup);
    if !text.is_empty() {
        blocks.push(Block::Text { content: text });
    }
}

fn push_code(blocks: &mut BlockSequence, inner: &str) {
    let code = normalize_code(&decode_entities(&RE_ANY_TAG.replace_all(inner, "")));
    if !code.trim().is_empty() {
        blocks.push(Block::Code { content: code });
    }
}

pub fn parse_blocks(markup: &str) -> BlockSequence {
    if markup.is_empty() {
        return Vec::new();
    }
    let source = RE_DIV.replace_all(markup, "");
    let source = source.trim();

    let mut blocks: BlockSequence = Vec::new();
    let mut cursor = 0;

    for caps in RE_CODE_REGION.captures_iter(source) {
        let Some(region) = caps.get(0) else { continue };
        push_text(&mut blocks, &source[cursor..region.start()]);
        push_code(&mut blocks, caps.get(1).map_or("", |m| m.as_str()));
        cursor = region.end();
    }
    push_text(&mut blocks, &source[cursor..]);

    log::debug!("segmented {} bytes into {} block(s)", markup.len(), blocks.len());
    blocks
}
