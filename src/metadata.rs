//! Sample metadata loaded from a delimited text file.
//!
//! The file is keyed by a sample-name column and joined against leaf labels
//! at export time. Only the columns the user asked for are retained, in the
//! order the file header lists them, so output columns are stable across
//! runs regardless of how `--columns` was ordered.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::utils::progress_bar_builder::ProgressBarBuilder;

#[derive(Debug, Default)]
pub struct Metadata {
    /// Retained column names, in file-header order.
    pub columns: Vec<String>,
    rows: HashMap<String, Vec<String>>,
}

impl Metadata {
    /// No metadata: every lookup misses and no `meta_` fields are emitted.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads a TSV or CSV file (gzip transparently handled). The delimiter is
    /// chosen from the file name: tab when it contains ".tsv", comma
    /// otherwise.
    pub fn load(path: &Path, key_column: &str, columns: &[String]) -> Result<Self> {
        let delimiter = if path.to_string_lossy().contains(".tsv") {
            b'\t'
        } else {
            b','
        };
        let file = File::open(path)
            .with_context(|| format!("Failed to open metadata file: {}", path.display()))?;
        let (reader, _format) = niffler::get_reader(Box::new(BufReader::new(file)))
            .with_context(|| format!("Failed to read metadata file: {}", path.display()))?;
        Self::parse(BufReader::new(reader), delimiter, key_column, columns)
    }

    fn parse<R: BufRead>(
        reader: R,
        delimiter: u8,
        key_column: &str,
        columns: &[String],
    ) -> Result<Self> {
        let progress = ProgressBarBuilder::new("Loading metadata")
            .with_tick()
            .build()?;

        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(line) => line.context("Failed to read metadata header")?,
            None => bail!("metadata file is empty"),
        };
        let header: Vec<&str> = split_row(&header, delimiter);

        let Some(key_index) = header.iter().position(|&name| name == key_column) else {
            bail!("metadata file has no column named {key_column:?}");
        };
        // (position in the file row, output name) for each retained column.
        let mut selected: Vec<(usize, String)> = Vec::new();
        for (index, &name) in header.iter().enumerate() {
            if columns.iter().any(|wanted| wanted == name) {
                selected.push((index, name.to_string()));
            }
        }
        for wanted in columns {
            if !header.contains(&wanted.as_str()) {
                bail!("metadata file has no column named {wanted:?}");
            }
        }

        let mut rows = HashMap::new();
        for line in lines {
            let line = line.context("Failed to read metadata row")?;
            if line.is_empty() {
                continue;
            }
            let fields = split_row(&line, delimiter);
            let Some(&key) = fields.get(key_index) else {
                continue;
            };
            let values: Vec<String> = selected
                .iter()
                .map(|&(index, _)| fields.get(index).unwrap_or(&"").to_string())
                .collect();
            rows.insert(key.to_string(), values);
        }

        progress.finish_with_message(format!("Loaded metadata for {} samples", rows.len()));
        Ok(Self {
            columns: selected.into_iter().map(|(_, name)| name).collect(),
            rows,
        })
    }

    /// The retained column values for a sample, in [`Metadata::columns`]
    /// order.
    pub fn get(&self, label: &str) -> Option<&Vec<String>> {
        self.rows.get(label)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn split_row(line: &str, delimiter: u8) -> Vec<&str> {
    line.trim_end_matches(['\r', '\n'])
        .split(delimiter as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TSV: &str = "strain\tdate\tcountry\tlineage\n\
                       sample_a\t2021-01-04\tUK\tB.1.1.7\n\
                       sample_b\t2021-02-11\tUS\tB.1.2\n";

    #[test]
    fn columns_keep_header_order() {
        // Requested out of file order; stored in file order.
        let wanted = vec!["lineage".to_string(), "date".to_string()];
        let meta = Metadata::parse(Cursor::new(TSV), b'\t', "strain", &wanted).unwrap();
        assert_eq!(meta.columns, vec!["date", "lineage"]);
        assert_eq!(
            meta.get("sample_a").unwrap(),
            &vec!["2021-01-04".to_string(), "B.1.1.7".to_string()]
        );
        assert_eq!(meta.len(), 2);
        assert!(meta.get("sample_c").is_none());
    }

    #[test]
    fn missing_key_column_is_rejected() {
        let wanted = vec!["date".to_string()];
        assert!(Metadata::parse(Cursor::new(TSV), b'\t', "name", &wanted).is_err());
    }

    #[test]
    fn missing_requested_column_is_rejected() {
        let wanted = vec!["region".to_string()];
        assert!(Metadata::parse(Cursor::new(TSV), b'\t', "strain", &wanted).is_err());
    }

    #[test]
    fn short_rows_pad_with_empty_strings() {
        let csv = "strain,date,country\nsample_a,2021-01-04\n";
        let wanted = vec!["date".to_string(), "country".to_string()];
        let meta = Metadata::parse(Cursor::new(csv), b',', "strain", &wanted).unwrap();
        assert_eq!(
            meta.get("sample_a").unwrap(),
            &vec!["2021-01-04".to_string(), String::new()]
        );
    }
}
