use regex::Regex;
use std::sync::LazyLock;

static RE_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());
static RE_TRAILING_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)\s+$").unwrap());

fn is_single_token(trimmed: &str) -> bool {
    !trimmed.is_empty() && !trimmed.contains(char::is_whitespace)
}

// A merged pair is emitted once and never re-examined.
pub fn normalize_code(code: &str) -> String {
    let lines: Vec<&str> = RE_NEWLINE.split(code).collect();
    let mut merged: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let cur = lines[i];
        let cur_trim = cur.trim();
        if i + 1 < lines.len() && is_single_token(cur_trim) {
            merged.push(format!("{} {}", cur_trim, lines[i + 1].trim_start()));
            i += 2;
            continue;
        }
        merged.push(cur.to_string());
        i += 1;
    }

    // `\s` spans line breaks, so whitespace-only lines fold into the break before them.
    RE_TRAILING_WS.replace_all(&merged.join("\n"), "").into_owned()
}
