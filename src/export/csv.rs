use super::model::SampleExport;
use crate::errors::AppResult;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Write rows with a header line. Empty values become empty fields.
pub fn write_csv<W: Write>(out: W, rows: &[SampleExport]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    if rows.is_empty() {
        // serialize() writes the header only together with the first row
        wtr.write_record(super::HEADERS)?;
    }
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(path: &Path, rows: &[SampleExport]) -> AppResult<()> {
    write_csv(File::create(path)?, rows)
}

/// Read a file produced by `write_csv`.
pub fn read_csv<R: Read>(input: R) -> AppResult<Vec<SampleExport>> {
    let mut rdr = csv::Reader::from_reader(input);
    let mut out = Vec::new();
    for r in rdr.deserialize() {
        out.push(r?);
    }
    Ok(out)
}
