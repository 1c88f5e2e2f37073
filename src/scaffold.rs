//! Directory scaffolding: one kebab-case directory per student, each filled
//! with copies of the template directory's files.

use std::{
    collections::HashMap,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use log::{info, warn};

use crate::{database::Database, slug::to_kebab_case};

/// What a scaffolding run did, for the closing log line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub directories: usize,
    pub files_copied: usize,
    pub collisions: usize,
}

/// Create `parent_dir/<slug>` for every entry and copy each regular file of
/// `template_dir` into it, overwriting same-named files.
///
/// Re-running against the same inputs reproduces the same tree. Two names
/// that slug to the same directory are logged and counted; the later entry's
/// copies win.
pub fn scaffold_directories(
    db: &Database,
    template_dir: &Path,
    parent_dir: &Path,
) -> Result<ScaffoldSummary> {
    if !template_dir.is_dir() {
        bail!(
            "template directory {} does not exist",
            template_dir.display()
        );
    }
    fs::create_dir_all(parent_dir)
        .with_context(|| format!("creating parent directory {}", parent_dir.display()))?;

    let template_files = list_template_files(template_dir)?;

    let mut summary = ScaffoldSummary::default();
    let mut seen_slugs: HashMap<String, String> = HashMap::new();

    for entry in db.entries() {
        let slug = to_kebab_case(entry.name());
        if let Some(previous) = seen_slugs.insert(slug.clone(), entry.name().to_string()) {
            warn!(
                "slug collision: {:?} and {:?} both map to {:?}; the later entry's files win",
                previous,
                entry.name(),
                slug
            );
            summary.collisions += 1;
        }

        let dest = parent_dir.join(&slug);
        fs::create_dir_all(&dest)
            .with_context(|| format!("creating {}", dest.display()))?;

        for (file_name, source) in &template_files {
            let target = dest.join(file_name);
            fs::copy(source, &target).with_context(|| {
                format!("copying {} to {}", source.display(), target.display())
            })?;
            summary.files_copied += 1;
        }
        summary.directories += 1;

        println!("Processed directory for {} at {}/", entry.name(), dest.display());
        info!("Processed directory for {} at {}/", entry.name(), dest.display());
    }

    Ok(summary)
}

// Immediate children only; subdirectories and symlinks are skipped.
// symlink_metadata keeps links classified as links instead of their targets.
fn list_template_files(dir: &Path) -> Result<Vec<(OsString, PathBuf)>> {
    let mut files = Vec::new();
    for dirent in
        fs::read_dir(dir).with_context(|| format!("reading template directory {}", dir.display()))?
    {
        let dirent = dirent
            .with_context(|| format!("reading template directory {}", dir.display()))?;
        let path = dirent.path();
        let meta = fs::symlink_metadata(&path)
            .with_context(|| format!("inspecting {}", path.display()))?;
        if meta.is_file() {
            files.push((dirent.file_name(), path));
        } else {
            info!("skipping non-file template entry {}", path.display());
        }
    }
    files.sort();
    Ok(files)
}
