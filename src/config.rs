use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_feed_path")]
    pub feed_path: PathBuf,

    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,

    // 0 shows the whole excerpt
    #[serde(default = "default_excerpt_max_lines")]
    pub excerpt_max_lines: usize,

    // 0 disables wrapping
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    #[serde(default = "default_code_indent")]
    pub code_indent: usize,
}

fn default_feed_path() -> PathBuf {
    PathBuf::from("data.json")
}
fn default_title_max_chars() -> usize {
    50
}
fn default_excerpt_max_lines() -> usize {
    5
}
fn default_wrap_width() -> usize {
    80
}
fn default_code_indent() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Config {
            feed_path: default_feed_path(),
            title_max_chars: 50,
            excerpt_max_lines: 5,
            wrap_width: 80,
            code_indent: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.feed_path, PathBuf::from("data.json"));
        assert_eq!(config.title_max_chars, 50);
        assert_eq!(config.excerpt_max_lines, 5);
        assert_eq!(config.wrap_width, 80);
        assert_eq!(config.code_indent, 4);
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "feed_path": "public/data.json",
            "title_max_chars": 30,
            "excerpt_max_lines": 0,
            "wrap_width": 100,
            "code_indent": 2
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.feed_path, PathBuf::from("public/data.json"));
        assert_eq!(config.title_max_chars, 30);
        assert_eq!(config.excerpt_max_lines, 0);
        assert_eq!(config.wrap_width, 100);
        assert_eq!(config.code_indent, 2);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: Config = serde_json::from_str(r#"{"wrap_width": 0}"#).unwrap();
        assert_eq!(config.wrap_width, 0);
        assert_eq!(config.title_max_chars, 50);
        assert_eq!(config.feed_path, PathBuf::from("data.json"));
    }
}
