//! Build script embedding the word lists
//!
//! Each `data/*.txt` list becomes a `&[&str]` const plus its length, written
//! to `OUT_DIR` and pulled in by `src/wordlists/embedded.rs`.

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Source file, const name and doc line for every embedded list
const LISTS: &[(&str, &str, &str)] = &[
    ("solutions", "SOLUTIONS", "Curated Letter Boxed answer words"),
    ("common", "COMMON", "Common English words"),
];

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);

    for &(name, const_name, doc) in LISTS {
        let input = format!("data/{name}.txt");
        println!("cargo:rerun-if-changed={input}");
        embed_list(&input, &out_dir.join(format!("{name}.rs")), const_name, doc)?;
    }
    Ok(())
}

/// Write one list as Rust source, skipping blank lines
fn embed_list(input: &str, output: &Path, const_name: &str, doc: &str) -> io::Result<()> {
    let content = fs::read_to_string(input)
        .map_err(|err| io::Error::new(err.kind(), format!("reading {input}: {err}")))?;
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut out = BufWriter::new(fs::File::create(output)?);
    writeln!(out, "/// {doc} ({} words)", words.len())?;
    writeln!(out, "pub const {const_name}: &[&str] = &[")?;
    for word in &words {
        writeln!(out, "    {word:?},")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    writeln!(out, "/// Number of words in {const_name}")?;
    writeln!(out, "pub const {const_name}_COUNT: usize = {};", words.len())?;
    out.flush()
}
