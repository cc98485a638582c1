//! Packaging step: mirror the static asset tree into the build output.
//!
//! Symlinks are recreated as links pointing at the same target, never
//! dereferenced. The destination is wiped on every run so stale files from a
//! previous build cannot survive.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
    pub links: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing to package; the destination was not touched.
    SourceMissing,
    Copied(CopyStats),
}

pub fn copy_assets(src: &Path, dest: &Path) -> Result<CopyOutcome> {
    match fs::metadata(src) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("no assets at {}, skipping", src.display());
            return Ok(CopyOutcome::SourceMissing);
        }
        Err(e) => return Err(e).with_context(|| format!("inspecting {}", src.display())),
    }

    remove_existing(dest)?;
    fs::create_dir_all(dest).with_context(|| format!("creating {}", dest.display()))?;

    let mut stats = CopyStats::default();
    copy_tree(src, dest, &mut stats)?;

    info!(
        "copied {} files, {} dirs, {} links from {} to {}",
        stats.files,
        stats.dirs,
        stats.links,
        src.display(),
        dest.display()
    );
    Ok(CopyOutcome::Copied(stats))
}

fn remove_existing(path: &Path) -> Result<()> {
    let res = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    };
    res.with_context(|| format!("clearing {}", path.display()))
}

fn copy_tree(src: &Path, dest: &Path, stats: &mut CopyStats) -> Result<()> {
    let entries = fs::read_dir(src).with_context(|| format!("reading {}", src.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("reading {}", src.display()))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        // file_type() does not follow links
        let ty = entry
            .file_type()
            .with_context(|| format!("inspecting {}", from.display()))?;

        if ty.is_dir() {
            fs::create_dir_all(&to).with_context(|| format!("creating {}", to.display()))?;
            stats.dirs += 1;
            copy_tree(&from, &to, stats)?;
        } else if ty.is_symlink() {
            let target =
                fs::read_link(&from).with_context(|| format!("reading link {}", from.display()))?;
            debug!("link {} -> {}", to.display(), target.display());
            symlink(&from, &target, &to)
                .with_context(|| format!("linking {} -> {}", to.display(), target.display()))?;
            stats.links += 1;
        } else {
            fs::copy(&from, &to)
                .with_context(|| format!("copying {} to {}", from.display(), to.display()))?;
            stats.files += 1;
        }
    }

    Ok(())
}

#[cfg(unix)]
fn symlink(_original: &Path, target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(original: &Path, target: &Path, link: &Path) -> io::Result<()> {
    use std::os::windows::fs::{symlink_dir, symlink_file};

    match fs::metadata(original) {
        Ok(meta) if meta.is_dir() => symlink_dir(target, link),
        _ => symlink_file(target, link),
    }
}
