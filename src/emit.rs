use crate::config::Config;
use crate::feed::FeedState;
use crate::ir::Block;
use crate::view::{cards, Card, Detail, NO_SELF_TEXT};

const CODE_FENCE: &str = "```";

pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }
    let options = textwrap::Options::new(width);
    let mut out = Vec::new();
    for segment in text.split('\n') {
        for line in textwrap::wrap(segment, &options) {
            out.push(line.into_owned());
        }
    }
    out
}

fn emit_block(block: &Block, config: &Config, out: &mut Vec<String>) {
    match block {
        Block::Text { content } => out.extend(wrap(content, config.wrap_width)),
        Block::Code { content } => {
            let indent = " ".repeat(config.code_indent);
            out.push(format!("{}{}", indent, CODE_FENCE));
            for line in content.split('\n') {
                out.push(format!("{}{}", indent, line).trim_end().to_string());
            }
            out.push(format!("{}{}", indent, CODE_FENCE));
        }
    }
}

pub fn emit_card(card: &Card, config: &Config) -> Vec<String> {
    let mut out = vec![format!("[{}] {}", card.key, card.title)];
    if card.excerpt.is_empty() {
        out.push(NO_SELF_TEXT.to_string());
    } else {
        let mut lines = wrap(&card.excerpt, config.wrap_width);
        if config.excerpt_max_lines > 0 && lines.len() > config.excerpt_max_lines {
            lines.truncate(config.excerpt_max_lines);
            if let Some(last) = lines.last_mut() {
                last.push('\u{2026}');
            }
        }
        out.extend(lines);
    }
    out.push(format!("Link to post: {}", card.url));
    out.push(format!("Score: {}", card.score));
    out
}

pub fn emit_cards(cards: &[Card], config: &Config) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            out.push(String::new());
        }
        out.extend(emit_card(card, config));
    }
    out
}

pub fn emit_detail(detail: &Detail, config: &Config) -> Vec<String> {
    let mut out = vec![
        detail.title.clone(),
        format!("Link to post: {}", detail.url),
        format!("Score: {}", detail.score),
    ];
    for block in &detail.blocks {
        out.push(String::new());
        emit_block(block, config, &mut out);
    }
    out
}

pub fn emit_state(state: &FeedState, config: &Config) -> Vec<String> {
    match state {
        FeedState::Loading => vec!["Loading\u{2026}".to_string()],
        FeedState::Failed(msg) => vec![msg.clone()],
        FeedState::Ready(listing) => emit_cards(&cards(listing, config), config),
    }
}
