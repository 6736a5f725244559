//! Sequential file writing for a module scaffold

use crate::config::ScaffoldLayout;
use crate::scaffold::plan::{plan_module, FileSpec};
use crate::scaffold::ModuleName;
use crate::templates::TemplateKind;
use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Status of one written file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFile {
    pub kind: TemplateKind,
    pub path: PathBuf,
}

impl CreatedFile {
    /// Green `✔ Created: <path>` line, path shown relative to the layout root
    pub fn notice(&self, layout: &ScaffoldLayout) -> ColoredString {
        format!("✔ Created: {}", layout.display_path(&self.path).display()).green()
    }
}

/// Write every file of the scaffold for `name`, in order
///
/// `on_created` runs after each file is closed. The first failure aborts the
/// sequence; files already written are left in place.
pub async fn create_module<F>(
    layout: &ScaffoldLayout,
    name: &ModuleName,
    mut on_created: F,
) -> Result<Vec<CreatedFile>>
where
    F: FnMut(&CreatedFile) -> Result<()>,
{
    let mut created = Vec::new();

    for spec in plan_module(layout, name) {
        let file = write_file(&spec).await?;
        on_created(&file)?;
        created.push(file);
    }

    Ok(created)
}

async fn write_file(spec: &FileSpec) -> Result<CreatedFile> {
    if let Some(parent) = spec.path.parent() {
        ensure_dir(parent).await?;
    }

    let mut file = fs::File::create(&spec.path)
        .await
        .with_context(|| format!("Failed to create file: {}", spec.path.display()))?;
    file.write_all(spec.content.as_bytes())
        .await
        .with_context(|| format!("Failed to write file: {}", spec.path.display()))?;
    file.flush()
        .await
        .with_context(|| format!("Failed to write file: {}", spec.path.display()))?;

    Ok(CreatedFile {
        kind: spec.kind,
        path: spec.path.clone(),
    })
}

async fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}
