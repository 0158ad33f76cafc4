use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::models::KeywordResult;

pub const EXPORT_FILE_NAME: &str = "keywords.csv";
const CSV_HEADER: &str = "Keyword,Score";

/// CSV with a `Keyword,Score` header, quoted keywords and scores to four decimals.
pub fn to_csv(keywords: &[KeywordResult]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + keywords.len() * 24);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for keyword in keywords {
        out.push_str(&format!(
            "\"{}\",{:.4}\n",
            keyword.keyword.replace('"', "\"\""),
            keyword.score
        ));
    }
    out
}

/// Read back a file produced by [`to_csv`].
pub fn parse_csv(data: &str) -> Result<Vec<KeywordResult>> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut keywords = Vec::new();

    for (line, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("malformed CSV row {}", line + 1))?;
        let keyword = row
            .get(0)
            .with_context(|| format!("missing keyword on row {}", line + 1))?;
        let score: f64 = row
            .get(1)
            .with_context(|| format!("missing score on row {}", line + 1))?
            .trim()
            .parse()
            .with_context(|| format!("invalid score on row {}", line + 1))?;
        keywords.push(KeywordResult::new(keyword, score));
    }

    Ok(keywords)
}

/// Write the CSV export into `dir` and return the file path.
pub fn write_csv(dir: &Path, keywords: &[KeywordResult]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, to_csv(keywords))
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    Ok(path)
}
