use crate::domain::model::Term;
use crate::domain::ports::TermSource;
use crate::utils::error::{PrefixError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Reads `weight<TAB>word` rows from a file on disk.
#[derive(Debug, Clone)]
pub struct TermFile {
    path: PathBuf,
}

impl TermFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TermSource for TermFile {
    fn load(&self) -> Result<Vec<Term>> {
        tracing::info!("📁 Loading terms from {}", self.path.display());
        let file = std::fs::File::open(&self.path)?;
        let terms = read_terms(file)?;
        tracing::info!("Loaded {} terms", terms.len());
        Ok(terms)
    }
}

/// Parses tab-separated terms from any reader. Lines starting with `#` are skipped.
pub fn read_terms<R: Read>(reader: R) -> Result<Vec<Term>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(reader);

    let mut terms = Vec::new();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        terms.push(parse_record(&record, line)?);
    }
    Ok(terms)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Term> {
    if record.len() != 2 {
        return Err(PrefixError::ValidationError {
            message: format!("line {}: expected 2 fields, found {}", line, record.len()),
        });
    }

    let weight = record[0].parse::<u64>().map_err(|e| PrefixError::ValidationError {
        message: format!("line {}: invalid weight '{}': {}", line, &record[0], e),
    })?;

    let word = &record[1];
    if word.is_empty() {
        return Err(PrefixError::ValidationError {
            message: format!("line {}: word cannot be empty", line),
        });
    }

    Ok(Term::new(word, weight))
}
