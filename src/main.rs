use clap::Parser;
use feedblocks::config::Config;
use feedblocks::emit;
use feedblocks::feed::{FeedLoad, FeedState};
use feedblocks::view::Selection;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "feedblocks", about = "Render a post feed as cards, or one post as text and code blocks")]
struct Cli {
    /// Feed document (default: from config or data.json)
    feed: Option<PathBuf>,

    /// Open the detail view for a post id or 0-based index
    #[arg(long)]
    open: Option<String>,

    /// Print parsed blocks as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Wrap width for text blocks (0 = no wrap)
    #[arg(long)]
    wrap: Option<usize>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| die(&format!("cannot encode JSON: {}", e)))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["feedblocks.config.json", "config/feedblocks.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    // CLI overrides
    if let Some(ref feed) = cli.feed {
        config.feed_path = feed.clone();
    }
    if let Some(w) = cli.wrap {
        config.wrap_width = w;
    }

    log::info!("loading feed from {}", config.feed_path.display());
    let state = FeedLoad::new().run(&config.feed_path).unwrap_or_default();

    let listing = match state {
        FeedState::Ready(listing) => listing,
        other => {
            for line in emit::emit_state(&other, &config) {
                eprintln!("{}", line);
            }
            process::exit(1);
        }
    };

    if let Some(ref key) = cli.open {
        let post = listing
            .find(key)
            .unwrap_or_else(|| die(&format!("no post matches {}", key)));
        let mut selection = Selection::default();
        selection.open(post);
        let Some(detail) = selection.current() else {
            die("detail view did not open");
        };
        if cli.json {
            println!("{}", to_json(&detail.blocks));
        } else {
            println!("{}", emit::emit_detail(detail, &config).join("\n"));
        }
        return;
    }

    if cli.json {
        let all: Vec<_> = listing.posts().map(|p| p.blocks()).collect();
        println!("{}", to_json(&all));
    } else {
        println!("{}", emit::emit_state(&FeedState::Ready(listing), &config).join("\n"));
    }
}
