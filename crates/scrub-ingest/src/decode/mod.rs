//! Decoders from source files into datasets.

mod delimited;
mod header;
mod json;
mod spreadsheet;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use scrub_model::Dataset;
use tracing::info;

use crate::error::{IngestError, Result};
use crate::format::InputFormat;

pub use delimited::read_delimited;
pub use header::{EMPTY_HEADER, make_unique};
pub use json::read_json;
pub use spreadsheet::read_spreadsheet;

/// Reads a dataset from `path`, choosing the decoder by extension.
///
/// On any failure no dataset is returned; see
/// [`IngestError::is_decode_failure`].
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let format = InputFormat::from_path(path)?;
    let start = Instant::now();
    let dataset = match format {
        InputFormat::Csv => read_delimited(open(path)?, b',', path)?,
        InputFormat::Tsv => read_delimited(open(path)?, b'\t', path)?,
        InputFormat::Json => read_json(open(path)?, path)?,
        InputFormat::Spreadsheet => read_spreadsheet(path)?,
    };
    info!(
        path = %path.display(),
        format = %format,
        rows = dataset.len(),
        columns = dataset.headers().len(),
        duration_ms = start.elapsed().as_millis(),
        "decoded dataset"
    );
    Ok(dataset)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| IngestError::read(path, e))
}
