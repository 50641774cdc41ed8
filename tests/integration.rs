use feedblocks::config::Config;
use feedblocks::emit;
use feedblocks::feed::{load_feed, FeedLoad, FeedState, Listing, LOAD_FAILED};
use feedblocks::view::{cards, Selection};
use feedblocks::Block;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_listing() -> Listing {
    let path = fixture("data.json");
    load_feed(&path).unwrap_or_else(|e| panic!("cannot load {}: {}", path.display(), e))
}

#[test]
fn test_question_post_blocks() {
    let listing = load_listing();
    let post = listing.find("1a2b3c").unwrap();
    assert_eq!(
        post.blocks(),
        vec![
            Block::text("I tried this:"),
            Block::code(
                "let f = File::open(\"a.txt\")?;\n\
                 for line in BufReader::new(f).lines() {\n    \
                 println!(\"{}\", line?);\n\
                 }"
            ),
            Block::text("Is there something faster?"),
        ]
    );
}

#[test]
fn test_list_post_blocks() {
    let listing = load_listing();
    let post = listing.find("2").unwrap();
    assert_eq!(post.id, None);
    assert_eq!(
        post.blocks(),
        vec![
            Block::text("\u{2022} pattern matching\n\n\u{2022} cargo & crates.io"),
            Block::code("match x {\n    _ => (),\n}"),
        ]
    );
}

#[test]
fn test_cards() {
    let listing = load_listing();
    let config = Config::default();
    let cards = cards(&listing, &config);
    assert_eq!(cards.len(), 3);

    assert_eq!(cards[0].key, "1a2b3c");
    assert!(cards[0].excerpt.starts_with("I tried this:\n\nlet f = File::open"));
    assert!(cards[0].excerpt.ends_with("}\n\nIs there something faster?"));

    assert_eq!(
        cards[1].title,
        "Weekly thread: what are you working on this week?\u{2026}"
    );
    assert_eq!(cards[1].excerpt, "");

    assert_eq!(cards[2].key, "2");
    assert_eq!(cards[2].score, 3);
}

#[test]
fn test_grid_output() {
    let listing = load_listing();
    let config = Config::default();
    let lines = emit::emit_state(&FeedState::Ready(listing), &config);
    assert_eq!(lines[0], "[1a2b3c] How do I read a file line by line?");
    assert!(lines.contains(&"No self text".to_string()));
    assert!(lines.contains(&"Score: 128".to_string()));
    assert!(lines.contains(&"Link to post: https://example.com/list".to_string()));
}

#[test]
fn test_detail_output() {
    let listing = load_listing();
    let mut config = Config::default();
    config.code_indent = 0;
    let mut selection = Selection::default();
    selection.open(listing.find("2").unwrap());
    let lines = emit::emit_detail(selection.current().unwrap(), &config);
    assert_eq!(
        lines,
        vec![
            "Things I like",
            "Link to post: https://example.com/list",
            "Score: 3",
            "",
            "\u{2022} pattern matching",
            "",
            "\u{2022} cargo & crates.io",
            "",
            "```",
            "match x {",
            "    _ => (),",
            "}",
            "```",
        ]
    );
    selection.close();
    assert!(selection.current().is_none());
}

#[test]
fn test_missing_feed() {
    let state = FeedLoad::new().run(&fixture("missing.json")).unwrap();
    match state {
        FeedState::Failed(msg) => assert_eq!(msg, LOAD_FAILED),
        other => panic!("unexpected state: {:?}", other),
    }
}
