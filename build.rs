//! Build script to generate embedded word pools
//!
//! Reads the per-tier word list files and generates Rust source code with
//! const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/easy.txt",
        &Path::new(&out_dir).join("easy.rs"),
        "EASY_WORDS",
        "Easy-tier word pool (common everyday words)",
    );

    generate_word_list(
        "data/medium.txt",
        &Path::new(&out_dir).join("medium.rs"),
        "MEDIUM_WORDS",
        "Medium-tier word pool",
    );

    generate_word_list(
        "data/hard.txt",
        &Path::new(&out_dir).join("hard.rs"),
        "HARD_WORDS",
        "Hard-tier word pool (rare letters and uncommon words)",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/easy.txt");
    println!("cargo:rerun-if-changed=data/medium.txt");
    println!("cargo:rerun-if-changed=data/hard.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
