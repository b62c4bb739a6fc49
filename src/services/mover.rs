use std::path::{Path, PathBuf};

const MAX_CONFLICT_ATTEMPTS: u32 = 100;

#[derive(thiserror::Error, Debug)]
pub enum MoveError {
    #[error("too many name conflicts for {0}")]
    TooManyConflicts(String),
}

/// Moves a PDF and its sidecar into `target_dir`. Destinations are
/// conflict-resolved independently before either rename; a partially
/// completed move is not rolled back.
pub fn move_pair(pdf: &Path, sidecar: &Path, target_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(target_dir)?;

    let pdf_dst = resolve_conflict(target_dir.join(file_name(pdf)?))?;
    let sidecar_dst = if sidecar.exists() {
        Some(resolve_conflict(target_dir.join(file_name(sidecar)?))?)
    } else {
        None
    };

    std::fs::rename(pdf, &pdf_dst)?;
    if let Some(dst) = sidecar_dst {
        if sidecar.exists() {
            std::fs::rename(sidecar, dst)?;
        }
    }
    Ok(pdf_dst)
}

fn file_name(path: &Path) -> anyhow::Result<&std::ffi::OsStr> {
    path.file_name()
        .ok_or_else(|| anyhow::anyhow!("path has no file name: {}", path.display()))
}

/// Returns a destination free at the moment of checking: the desired path
/// itself, or the first unused `name_1`, `name_2`, ... variant. Not atomic
/// with the rename that follows.
pub fn resolve_conflict(desired: PathBuf) -> anyhow::Result<PathBuf> {
    if !desired.exists() {
        return Ok(desired);
    }

    let stem = desired
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = desired.extension().map(|e| e.to_string_lossy().into_owned());
    let dir = desired.parent().map(Path::to_path_buf).unwrap_or_default();

    for counter in 1..MAX_CONFLICT_ATTEMPTS {
        let mut name = format!("{}_{}", stem, counter);
        if let Some(ext) = &extension {
            name.push('.');
            name.push_str(ext);
        }
        let candidate = dir.join(name);
        if !candidate.exists() {
            return Ok(candidate);
        }
    }
    Err(MoveError::TooManyConflicts(desired.display().to_string()).into())
}
