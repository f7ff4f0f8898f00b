use std::fs::{self, File};
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::entry::{EntryKind, TreeEntry};

/// Errors that can occur while writing a placeholder structure.
#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    #[error("failed to create {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("refusing to write outside the output directory: {0}")]
    UnsafePath(String),
}

/// What a materialize run created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub directories: usize,
    pub files: usize,
}

/// Mirror a listing under `base` as empty directories and zero-length files.
///
/// Entries are processed in listing order. Every file creates its own parent
/// directories, so a file listed before its directory still lands correctly.
/// Existing files are truncated. The first failure stops the run and leaves
/// whatever was already written in place.
pub fn materialize(
    entries: &[TreeEntry],
    base: &Path,
) -> Result<MaterializeReport, MaterializeError> {
    create_dir_all(base)?;

    let mut report = MaterializeReport::default();

    for entry in entries {
        let target = resolve(base, &entry.path)?;

        match &entry.kind {
            EntryKind::Directory => {
                create_dir_all(&target)?;
                report.directories += 1;
            }
            EntryKind::File => {
                if let Some(parent) = target.parent() {
                    create_dir_all(parent)?;
                }
                File::create(&target).map_err(|source| MaterializeError::Io {
                    path: target.clone(),
                    source,
                })?;
                report.files += 1;
            }
            EntryKind::Other(kind) => {
                debug!("Skipping {} entry: {}", kind, entry.path);
                continue;
            }
        }

        debug!("Created {}", target.display());
    }

    Ok(report)
}

/// Join a listing path onto `base`, rejecting anything that could escape it.
fn resolve(base: &Path, relative: &str) -> Result<PathBuf, MaterializeError> {
    let relative_path = Path::new(relative);

    let safe = relative_path
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));

    if !safe || relative.is_empty() {
        return Err(MaterializeError::UnsafePath(relative.to_owned()));
    }

    Ok(base.join(relative_path))
}

fn create_dir_all(path: &Path) -> Result<(), MaterializeError> {
    fs::create_dir_all(path).map_err(|source| MaterializeError::Io {
        path: path.to_owned(),
        source,
    })
}
