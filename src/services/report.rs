use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use itertools::Itertools;

/// Write the result set to a UTF-8 text file: a header with the target
/// domain, timestamp, and total, then one email per line. Returns the path
/// actually written, with `.txt` appended when the caller left it off.
pub fn save_results(
    filename: &str,
    domain: &str,
    emails: &HashSet<String>,
) -> anyhow::Result<PathBuf> {
    let path = ensure_txt_extension(filename);
    let mut file = File::create(&path)?;

    writeln!(file, "Domain Email Finder Results")?;
    writeln!(file, "Target Domain: {}", domain)?;
    writeln!(
        file,
        "Search Date: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(file, "Total Emails Found: {}", emails.len())?;
    writeln!(file, "{}\n", "=".repeat(50))?;

    for email in emails.iter().sorted() {
        writeln!(file, "{}", email)?;
    }

    Ok(path)
}

fn ensure_txt_extension(filename: &str) -> PathBuf {
    match filename.ends_with(".txt") {
        true => PathBuf::from(filename),
        false => PathBuf::from(format!("{}.txt", filename)),
    }
}
