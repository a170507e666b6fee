// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::ExportRecord;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header row, then one record per item; an empty table still gets its
/// header. Fields with a comma, quote or newline are quoted and inner
/// quotes doubled.
pub fn write_csv<W: Write, T: ExportRecord>(writer: W, records: &[T]) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(T::HEADERS)?;
    for item in records {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write, T: Serialize>(mut writer: W, records: &[T]) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub(crate) fn export_json<T: Serialize>(records: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));
    let file = File::create(path)?;
    write_json(BufWriter::new(file), records)
}

pub(crate) fn export_csv<T: ExportRecord>(records: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), records)
}
