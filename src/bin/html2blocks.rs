//! html2blocks — split one self-text markup fragment into text and code blocks
//!
//! Reads the fragment from a file or stdin and prints the block sequence as
//! JSON. Pass `--escaped` when the input is still entity-escaped the way the
//! feed delivers it.

use clap::Parser;
use feedblocks::segment::parse_blocks;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "html2blocks", about = "Markup fragment to text/code blocks")]
struct Cli {
    /// Input markup file (default: stdin)
    input: Option<PathBuf>,

    /// Input is entity-escaped feed self-text
    #[arg(long)]
    escaped: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let markup = match cli.input {
        Some(ref p) => fs::read_to_string(p)
            .unwrap_or_else(|e| die(&format!("cannot read {}: {}", p.display(), e))),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| die(&format!("cannot read stdin: {}", e)));
            buf
        }
    };

    let blocks = if cli.escaped {
        feedblocks::parse(Some(markup.as_str()))
    } else {
        parse_blocks(&markup)
    };
    let json = serde_json::to_string_pretty(&blocks)
        .unwrap_or_else(|e| die(&format!("cannot encode JSON: {}", e)));

    if let Some(ref output_path) = cli.output {
        fs::write(output_path, format!("{}\n", json))
            .unwrap_or_else(|e| die(&format!("cannot write {}: {}", output_path.display(), e)));
        eprintln!("wrote {} block(s) -> {}", blocks.len(), output_path.display());
    } else {
        println!("{}", json);
    }
}
