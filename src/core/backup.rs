use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use clap::ValueEnum;
use flate2::Compression;
use flate2::write::GzEncoder;
use rusqlite::Connection;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ArchiveFormat {
    Zip,
    TarGz,
}

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally archiving it.
    /// Returns the path of the final backup file, or `None` when the user
    /// declined to overwrite an existing file.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        archive: ArchiveFormat,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);
        let dest = crate::utils::path::expand_tilde(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ If destination file exists → ask confirmation
        if dest.exists() && !force && !confirm_overwrite(&dest)? {
            info("Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy database
        fs::copy(src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let archived = match archive {
                ArchiveFormat::Zip => compress_zip(&dest)?,
                ArchiveFormat::TarGz => compress_tar_gz(&dest)?,
            };

            if let Err(e) = fs::remove_file(&dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            } else {
                info(format!("Removed uncompressed backup: {}", dest.display()));
            }

            archived
        } else {
            dest.clone()
        };

        // 6️⃣ Log in DB
        if let Ok(conn) = Connection::open(src) {
            ttlog_quiet(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(Some(final_path))
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!(
        "The file '{}' already exists. Overwrite it?",
        dest.display()
    ));
    print!("Confirm [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn entry_name(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))
}

/// The archive must not overwrite the copy it is built from.
fn ensure_distinct(copy: &Path, archive: &Path) -> AppResult<()> {
    if copy == archive {
        return Err(AppError::Other(format!(
            "backup file {} already has the archive extension; use a .sqlite name with --compress",
            copy.display()
        )));
    }
    Ok(())
}

/// Compress a backup using .zip
fn compress_zip(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    ensure_distinct(path, &zip_path)?;
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name(path)?, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("📦 Compressed: {}", zip_path.display()));

    Ok(zip_path)
}

/// Compress a backup using .tar.gz
fn compress_tar_gz(path: &Path) -> AppResult<PathBuf> {
    let gz_path = path.with_extension("tar.gz");
    ensure_distinct(path, &gz_path)?;
    let file = fs::File::create(&gz_path)?;

    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.append_path_with_name(path, entry_name(path)?)?;

    let encoder = builder.into_inner()?;
    encoder.finish()?;

    info(format!("📦 Compressed: {}", gz_path.display()));

    Ok(gz_path)
}
