//! Build script to generate embedded word lists
//!
//! Reads one word list file per difficulty and generates Rust source code with
//! const arrays indexed by `difficulty - 3`.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const DIFFICULTIES: std::ops::RangeInclusive<u8> = 3..=9;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Curated daily puzzles
    generate_word_lists(
        "puzzles",
        &Path::new(&out_dir).join("puzzles.rs"),
        "PUZZLES",
        "Curated daily puzzle words, one list per difficulty",
    );

    // Every word accepted as a guess (and drawn for random games)
    generate_word_lists(
        "all",
        &Path::new(&out_dir).join("all.rs"),
        "ALL",
        "All accepted guess words, one list per difficulty",
    );

    // Rebuild if word lists change
    for difficulty in DIFFICULTIES {
        println!("cargo:rerun-if-changed=data/puzzles-{difficulty}.txt");
        println!("cargo:rerun-if-changed=data/all-{difficulty}.txt");
    }
}

fn generate_word_lists(prefix: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: [&[&str]; 7] = [").unwrap();

    for difficulty in DIFFICULTIES {
        let input_path = format!("data/{prefix}-{difficulty}.txt");
        let content = fs::read_to_string(&input_path)
            .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

        writeln!(output, "    // {difficulty} letters").unwrap();
        writeln!(output, "    &[").unwrap();
        for word in content.lines().map(str::trim).filter(|w| !w.is_empty()) {
            writeln!(output, "        \"{word}\",").unwrap();
        }
        writeln!(output, "    ],").unwrap();
    }

    writeln!(output, "];").unwrap();
}
