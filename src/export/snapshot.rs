use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::models::Snapshot;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub fn save(snapshot: &Snapshot, path: &Path, force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, snapshot)?;
    w.flush()?;
    Ok(())
}

pub fn load(path: &Path) -> AppResult<Snapshot> {
    let file = File::open(path)
        .map_err(|e| AppError::Snapshot(format!("cannot open '{}': {e}", path.display())))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::Snapshot(format!("'{}' is not a valid snapshot: {e}", path.display())))
}
