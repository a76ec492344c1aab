use crate::errors::AppResult;
use crate::models::WorkDayRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub(super) fn write_json(path: &Path, records: &[&WorkDayRecord]) -> AppResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, records)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
