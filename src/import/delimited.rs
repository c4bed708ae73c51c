//! Comma-delimited book lists: `isbn, title, author, price, quantity`, no
//! header, no quoting.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::{RecordSource, SourceRow};
use crate::{error::AppResult, models::RawRecord};

/// Rows from any buffered reader
pub struct DelimitedReader<R> {
    name: String,
    reader: Option<R>,
}

impl<R: BufRead> DelimitedReader<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader: Some(reader),
        }
    }
}

impl<R: BufRead> RecordSource for DelimitedReader<R> {
    fn name(&self) -> String {
        self.name.clone()
    }

    /// Drains the reader; a second call yields no rows.
    fn rows(&mut self) -> AppResult<Vec<SourceRow>> {
        let Some(reader) = self.reader.take() else {
            return Ok(Vec::new());
        };
        parse_lines(reader)
    }
}

/// Rows from a file on disk, opened lazily
#[derive(Debug, Clone)]
pub struct DelimitedFile {
    path: PathBuf,
}

impl DelimitedFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for DelimitedFile {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn rows(&mut self) -> AppResult<Vec<SourceRow>> {
        let file = File::open(&self.path)?;
        tracing::debug!("Reading books from {}", self.path.display());
        parse_lines(BufReader::new(file))
    }
}

fn parse_lines(reader: impl BufRead) -> AppResult<Vec<SourceRow>> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        rows.push(SourceRow {
            line_number: idx + 1,
            line: line.to_string(),
            record: RawRecord::from_line(line),
        });
    }
    Ok(rows)
}
