//! Accumulating records and writing them out.
use std::{fs::File, io};

use camino::{Utf8Path, Utf8PathBuf};
use csv::WriterBuilder;
use log::debug;
use thiserror::Error;

use crate::record::{ExportRecord, HEADER};

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("couldn't create {}: {}", .path, .source)]
    Create {
        path: Utf8PathBuf,
        source: io::Error,
    },

    #[error("csv error: {}", .0)]
    CsvError(#[from] csv::Error),

    #[error("io error: {}", .0)]
    IOError(#[from] io::Error),
}

/// Records collected so far, in the order they were found
#[derive(Debug, Default)]
pub struct Export {
    records: Vec<ExportRecord>,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ExportRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ExportRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write a header row followed by one row per record.
    /// The header is written even when there are no records.
    pub fn write_to<W: io::Write>(&self, w: W) -> Result<(), WriteError> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(w);

        writer.write_record(HEADER)?;
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Create (or truncate) `path` and write the export to it
    pub fn write_csv(&self, path: &Utf8Path) -> Result<(), WriteError> {
        let file = File::create(path).map_err(|source| WriteError::Create {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("writing {} records to {}", self.len(), path);
        self.write_to(file)
    }
}
