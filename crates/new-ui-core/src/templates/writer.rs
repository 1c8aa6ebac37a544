//! Project directory creation and file writing

use super::Rendered;
use crate::error::ScaffoldError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Create `<parent>/<name>`, refusing to reuse an existing directory
pub async fn create_project_dir(parent: &Path, name: &str) -> Result<PathBuf, ScaffoldError> {
    let project_dir = parent.join(name);

    if fs::try_exists(&project_dir).await.unwrap_or(false) {
        return Err(ScaffoldError::AlreadyExists(project_dir));
    }

    fs::create_dir(&project_dir)
        .await
        .map_err(|e| ScaffoldError::from_io(&project_dir, e))?;

    tracing::debug!(path = %project_dir.display(), "created project directory");
    Ok(project_dir)
}

/// Write a renderer's output below `root`, returning the written paths
pub async fn write_rendered(
    root: &Path,
    rendered: &Rendered,
) -> Result<Vec<PathBuf>, ScaffoldError> {
    for dir in &rendered.directories {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .await
            .map_err(|e| ScaffoldError::from_io(&path, e))?;
    }

    let mut written = Vec::with_capacity(rendered.files.len());
    for file in &rendered.files {
        let target_path = root.join(file.path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScaffoldError::from_io(parent, e))?;
        }

        fs::write(&target_path, &file.contents)
            .await
            .map_err(|e| ScaffoldError::from_io(&target_path, e))?;

        tracing::debug!(path = %target_path.display(), bytes = file.contents.len(), "wrote file");
        written.push(target_path);
    }

    Ok(written)
}
