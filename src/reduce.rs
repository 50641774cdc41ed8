use crate::entities::decode_entities;
use regex::Regex;
use std::sync::LazyLock;

static RE_BR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<\s*br\s*/?\s*>").unwrap());
static RE_P_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</p>").unwrap());
static RE_P_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<p[^>]*>").unwrap());
static RE_LI_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<li[^>]*>").unwrap());
static RE_LI_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</li>").unwrap());
static RE_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(?:ul|ol)(?:\s[^>]*)?>").unwrap());
static RE_ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub const BULLET: &str = "\u{2022} ";

pub fn collapse_whitespace(text: &str) -> String {
    text.split('\n')
        .map(|line| RE_WHITESPACE.replace_all(line, " ").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn html_to_plain_text(markup: &str) -> String {
    if markup.is_empty() {
        return String::new();
    }
    let text = RE_BR.replace_all(markup, "\n");
    let text = RE_P_CLOSE.replace_all(&text, "\n\n");
    let text = RE_P_OPEN.replace_all(&text, "");
    let text = RE_LI_OPEN.replace_all(&text, BULLET);
    let text = RE_LI_CLOSE.replace_all(&text, "\n");
    let text = RE_LIST.replace_all(&text, "");
    let text = RE_ANY_TAG.replace_all(&text, "");

    collapse_whitespace(&decode_entities(&text)).trim().to_string()
}
