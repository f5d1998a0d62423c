//! File organization by extension.
//!
//! Direct child files of a directory are moved into subdirectories named
//! after their lower-cased extension. Directories themselves are never
//! reorganized; they only appear in the preview tree.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::ToolError;

/// Bucket name for files without an extension.
pub const NO_EXTENSION_BUCKET: &str = "no_extension";

/// One planned (or performed) move of a file into its extension bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub file_name: String,
    pub bucket: String,
}

/// Result of an organization run.
#[derive(Debug, Clone, Default)]
pub struct OrganizeReport {
    pub moved: Vec<PlannedMove>,
}

/// Bucket a file name belongs to: its extension, lower-cased, without the
/// dot; [`NO_EXTENSION_BUCKET`] when there is none.
pub fn bucket_for(file_name: &str) -> String {
    match Path::new(file_name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => NO_EXTENSION_BUCKET.to_string(),
    }
}

/// List the moves [`organize_directory`] would perform, without touching the
/// filesystem. Only direct child files are considered; output is sorted by
/// file name.
pub fn plan_moves(dir: &Path) -> Result<Vec<PlannedMove>, ToolError> {
    let mut moves = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let bucket = bucket_for(&file_name);
        moves.push(PlannedMove { file_name, bucket });
    }
    moves.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(moves)
}

/// Move every direct child file of `dir` into its extension bucket, creating
/// bucket directories as needed.
///
/// Stops at the first failing move; files moved before the failure stay
/// moved.
pub fn organize_directory(dir: &Path) -> Result<OrganizeReport, ToolError> {
    let planned = plan_moves(dir)?;
    let mut report = OrganizeReport::default();

    for mv in planned {
        let bucket_dir = dir.join(&mv.bucket);
        if !bucket_dir.exists() {
            fs::create_dir_all(&bucket_dir)?;
        }
        let source = dir.join(&mv.file_name);
        let destination = bucket_dir.join(&mv.file_name);
        fs::rename(&source, &destination)?;
        report.moved.push(mv);
    }

    info!(dir = %dir.display(), moved = report.moved.len(), "organized directory");
    Ok(report)
}

/// A node of the directory preview tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub name: String,
    pub is_dir: bool,
    pub children: Vec<TreeNode>,
}

/// Build a preview tree of `dir`, descending at most `max_depth` levels.
///
/// At each level directories sort before files, both alphabetically. An
/// unreadable subdirectory becomes a leaf; the failure is logged, not
/// propagated.
pub fn preview_tree(dir: &Path, max_depth: usize) -> Result<TreeNode, ToolError> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    let children = read_children(dir, max_depth)?;
    Ok(TreeNode {
        name,
        is_dir: true,
        children,
    })
}

fn read_children(dir: &Path, depth_left: usize) -> Result<Vec<TreeNode>, ToolError> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        if path.is_dir() {
            let children = if depth_left > 1 {
                match read_children(&path, depth_left - 1) {
                    Ok(children) => children,
                    Err(err) => {
                        warn!(dir = %path.display(), error = %err, "skipping unreadable directory");
                        Vec::new()
                    }
                }
            } else {
                Vec::new()
            };
            dirs.push(TreeNode {
                name,
                is_dir: true,
                children,
            });
        } else {
            files.push(TreeNode {
                name,
                is_dir: false,
                children: Vec::new(),
            });
        }
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));
    dirs.extend(files);
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_follow_extension_rules() {
        assert_eq!(bucket_for("photo.jpg"), "jpg");
        assert_eq!(bucket_for("photo.JPG"), "jpg");
        assert_eq!(bucket_for("archive.tar.gz"), "gz");
        assert_eq!(bucket_for("README"), NO_EXTENSION_BUCKET);
        assert_eq!(bucket_for(".bashrc"), NO_EXTENSION_BUCKET);
        assert_eq!(bucket_for("trailing."), NO_EXTENSION_BUCKET);
    }
}
