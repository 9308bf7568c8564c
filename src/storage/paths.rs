//! Output destination checks

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Result, TagnetError};
use crate::ui;

/// Make sure every destination's directory exists before anything runs.
///
/// Missing directories are created when `create_missing` is set, otherwise
/// the first one found is a `Path` error.
pub fn validate_paths<'a, I>(paths: I, create_missing: bool) -> Result<()>
where
	I: IntoIterator<Item = &'a PathBuf>,
{
	for path in paths {
		let dir = parent_dir(path)?;
		if dir.is_dir() {
			continue;
		}
		if !create_missing {
			return Err(TagnetError::Path(dir));
		}
		fs::create_dir_all(&dir)?;
		ui::debug(&format!("Created directory: {}", dir.display()));
	}
	Ok(())
}

fn parent_dir(path: &Path) -> Result<PathBuf> {
	let absolute = std::path::absolute(path)?;
	Ok(absolute
		.parent()
		.map(Path::to_path_buf)
		.unwrap_or(absolute))
}
