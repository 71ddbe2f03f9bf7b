//! Newline-delimited URL files used by `urlclean clean --file/--output`.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Load URLs from `path`, one per line. Lines are trimmed and blank lines
/// skipped.
pub fn read_url_file(path: &Path) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            urls.push(trimmed.to_string());
        }
    }
    Ok(urls)
}

/// Write `urls` to `path`, one per line, replacing any existing file.
pub fn write_url_file<S: AsRef<str>>(path: &Path, urls: &[S]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for url in urls {
        writeln!(out, "{}", url.as_ref())?;
    }
    out.flush()
}
