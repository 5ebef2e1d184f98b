use anyhow::{Context, Result, anyhow};
use std::path::{Component, Path, PathBuf};

///
/// Place `input` below `output_dir` with `new_extension`.
///
/// Relative inputs keep their directories, but `.` and `..` are dropped
/// so the result never leaves `output_dir`.
/// Absolute inputs are put directly into `output_dir`.
///
pub fn translate_to_output_path(
    output_dir: &str,
    input: &str,
    new_extension: &str,
) -> Result<PathBuf> {
    let input_path = Path::new(input);
    let file_name = input_path
        .file_name()
        .ok_or_else(|| anyhow!("Input {input} does not name a file"))?;
    let mut output_path = PathBuf::from(output_dir);
    if let Some(parent) = input_path.parent().filter(|_| input_path.is_relative()) {
        output_path.extend(
            parent
                .components()
                .filter(|c| matches!(c, Component::Normal(_))),
        );
    }
    output_path.push(file_name);
    output_path.set_extension(new_extension);
    Ok(output_path)
}

///
/// Create all missing directories up to the parent of `path`.
///
pub fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}
