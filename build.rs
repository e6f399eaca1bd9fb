//! Build script to generate embedded word lists
//!
//! Reads the Polish word list files and generates Rust source code with
//! const arrays, one answer list per supported word length plus the extra
//! valid-guess list.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for length in 4..=7u32 {
        let input = format!("data/answers_{length}.txt");
        generate_word_list(
            &input,
            &Path::new(&out_dir).join(format!("answers_{length}.rs")),
            &format!("ANSWERS_{length}"),
            &format!("Polish answer words of length {length}"),
            Some(length as usize),
        );
        println!("cargo:rerun-if-changed={input}");
    }

    generate_word_list(
        "data/valid_extra.txt",
        &Path::new(&out_dir).join("valid_extra.rs"),
        "VALID_EXTRA",
        "Additional guessable Polish words (all lengths, not used as answers)",
        None,
    );
    println!("cargo:rerun-if-changed=data/valid_extra.txt");
}

fn generate_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
    expected_len: Option<usize>,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();
    let count = words.len();

    // Polish letters are non-ASCII, so lengths must be counted in chars
    if let Some(expected) = expected_len {
        for word in &words {
            let chars = word.chars().count();
            assert_eq!(
                chars, expected,
                "{input_path}: word '{word}' has {chars} letters, expected {expected}"
            );
        }
    }

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
