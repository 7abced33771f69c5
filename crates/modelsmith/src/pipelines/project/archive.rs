//! Zip archive handling for the project pipeline
//!
//! Unpacks the input source archive and repacks the staged document tree.
//! Both operations are inherently disk-bound and sit outside the workspace
//! abstraction.

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Extract a zip archive into `dest`
pub fn unpack_archive(archive_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive_path)
        .with_context(|| format!("failed to open archive '{}'", archive_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("failed to read archive '{}'", archive_path.display()))?;
    archive
        .extract(dest)
        .with_context(|| format!("failed to extract archive into '{}'", dest.display()))?;

    debug!(
        archive = %archive_path.display(),
        entries = archive.len(),
        "unpacked archive"
    );
    Ok(())
}

/// Pack every file under `src_dir` into a deflate-compressed zip
///
/// Entry names are relative to `src_dir` with forward-slash separators.
/// Returns the number of files packed.
pub fn pack_archive(src_dir: &Path, archive_path: &Path) -> Result<usize> {
    let file = File::create(archive_path)
        .with_context(|| format!("failed to create archive '{}'", archive_path.display()))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut packed = 0;
    for entry in WalkDir::new(src_dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(src_dir)
            .expect("walked path is under src_dir");
        let name = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        writer.start_file(name, options)?;
        let mut source = File::open(entry.path())?;
        io::copy(&mut source, &mut writer)?;
        packed += 1;
    }

    writer.finish()?;
    debug!(archive = %archive_path.display(), files = packed, "packed archive");
    Ok(packed)
}

/// Read a file as text, replacing malformed byte sequences
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
