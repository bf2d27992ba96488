//! The bundled sample word list.
//!
//! The CSV is compiled into the binary and exported byte-for-byte. Exports
//! never overwrite: when `spellingbee.csv` already exists in the target
//! directory a numeric suffix is appended (`spellingbee_1.csv`, ...).

use anyhow::{bail, Context, Result};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const SAMPLE_FILE_NAME: &str = "spellingbee.csv";

pub const SAMPLE_CSV: &[u8] = include_bytes!("../../assets/spellingbee.csv");

/// Write the sample list into `dir`, returning the path actually written.
pub fn export_sample(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let stem = Path::new(SAMPLE_FILE_NAME)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("spellingbee");

    for i in 0..1000 {
        let name = if i == 0 {
            SAMPLE_FILE_NAME.to_string()
        } else {
            format!("{}_{}.csv", stem, i)
        };
        let path = dir.join(name);
        // create_new makes the existence check and the create one step
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(SAMPLE_CSV)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to create {}", path.display()))
            }
        }
    }
    bail!("Too many sample files in {}", dir.display())
}
