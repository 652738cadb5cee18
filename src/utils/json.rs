use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

/// Saves an object to `dir/file_name`, creating `dir` first if needed.
pub fn dump_json<T: Serialize>(
    dir: &Path,
    file_name: &str,
    object: &T,
    pretty: bool,
) -> Result<PathBuf> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let path = dir.join(file_name);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, object)
    } else {
        serde_json::to_writer(&mut writer, object)
    };
    written.with_context(|| format!("Failed to serialize {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved object to {}", path.display());
    Ok(path)
}
