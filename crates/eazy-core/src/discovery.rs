//! # Catalog File Discovery
//!
//! Two ways of finding record files:
//!
//! - [`category_files`]: the fixed layout scan used by both validators:
//!   every `*.yaml` file directly inside `<root>/<category dir>/`.
//! - [`collect_inputs`]: expansion of command-line arguments for the SQL
//!   generator: directories are walked recursively, arguments containing
//!   glob syntax are expanded, and anything else is taken as a file path.
//!   A file path that does not exist is kept so the loader reports it.
//!
//! Results are always sorted so that order-dependent checks (duplicate
//! names) are reproducible across filesystems.

use std::path::{Component, Path, PathBuf};

use globset::GlobBuilder;
use walkdir::WalkDir;

use crate::category::Category;
use crate::error::CatalogError;

/// Extension of catalog record files.
pub const RECORD_EXTENSION: &str = "yaml";

fn is_record_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == RECORD_EXTENSION)
}

/// List the record files of one category under `root`, sorted by name.
///
/// Only files directly inside the category directory are returned. A
/// missing directory yields an empty list.
pub fn category_files(root: &Path, category: Category) -> Vec<PathBuf> {
    yaml_files_in(&root.join(category.dir_name()))
}

/// List the `*.yaml` files directly inside `dir`, sorted by name.
///
/// Subdirectories are not entered. A missing directory yields an empty
/// list.
pub fn yaml_files_in(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "directory not found");
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_record_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

/// Expand command-line inputs into a flat list of record files.
///
/// Each input is handled in order:
///
/// 1. an existing directory contributes every `.yaml` file beneath it,
///    recursively, sorted;
/// 2. an existing file is passed through unchanged;
/// 3. an input containing glob syntax (`*`, `?`, `[`, `{`) is a pattern
///    whose matching `.yaml` files are added, sorted (`*` does not cross
///    `/`, `**` does);
/// 4. anything else is a file path and is passed through unchanged even
///    though it does not exist, so loading it reports the read error.
///
/// Overlapping inputs are not de-duplicated.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidPattern`] if an input with glob syntax
/// is not a valid glob.
pub fn collect_inputs<I, S>(inputs: I) -> Result<Vec<PathBuf>, CatalogError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut files = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        let path = Path::new(input);
        if path.is_dir() {
            files.extend(walk_records(path));
        } else if path.is_file() || !input.contains(GLOB_META) {
            files.push(path.to_path_buf());
        } else {
            let matched = expand_glob(input)?;
            if matched.is_empty() {
                tracing::info!(input, "input matched no files");
            }
            files.extend(matched);
        }
    }
    Ok(files)
}

fn walk_records(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_record_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

/// Characters that start a glob construct.
const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// The longest leading run of path components free of glob syntax.
fn literal_base(pattern: &str) -> PathBuf {
    let mut base = PathBuf::new();
    let components: Vec<Component<'_>> = Path::new(pattern).components().collect();
    // The final component is the file part of the pattern.
    let dirs = components.len().saturating_sub(1);
    for component in &components[..dirs] {
        let text = component.as_os_str().to_string_lossy();
        if text.contains(GLOB_META) {
            break;
        }
        base.push(component.as_os_str());
    }
    base
}

fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>, CatalogError> {
    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| CatalogError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?
        .compile_matcher();

    let base = literal_base(pattern);
    let walk_root = if base.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        base.clone()
    };
    if !walk_root.is_dir() {
        return Ok(Vec::new());
    }

    let mut matched: Vec<PathBuf> = WalkDir::new(&walk_root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let path = entry.into_path();
            // Patterns without a directory part are relative to the
            // working directory, so drop the "./" walkdir prepends.
            if base.as_os_str().is_empty() {
                path.strip_prefix(".").map(Path::to_path_buf).unwrap_or(path)
            } else {
                path
            }
        })
        .filter(|path| is_record_file(path) && matcher.is_match(path))
        .collect();
    matched.sort();
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"name: x\n").unwrap();
    }

    #[test]
    fn test_category_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let courses = dir.path().join("courses");
        touch(&courses.join("rust_beginner_en.yaml"));
        touch(&courses.join("ansible_advanced_fr.yaml"));
        touch(&courses.join("notes.md"));
        touch(&courses.join("nested").join("go_beginner_en.yaml"));

        let files = category_files(dir.path(), Category::Course);
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["ansible_advanced_fr.yaml", "rust_beginner_en.yaml"]);
    }

    #[test]
    fn test_category_files_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(category_files(dir.path(), Category::Faq).is_empty());
    }

    #[test]
    fn test_collect_inputs_directory_recurses() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("courses").join("b_beginner_en.yaml"));
        touch(&dir.path().join("courses").join("sub").join("a_beginner_en.yaml"));
        touch(&dir.path().join("courses").join("README.md"));

        let files = collect_inputs([dir.path().to_str().unwrap()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "yaml"));
    }

    #[test]
    fn test_collect_inputs_file_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("paths").join("devops_en.yaml");
        touch(&file);
        let files = collect_inputs([file.to_str().unwrap()]).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_collect_inputs_glob() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = dir.path().join("faqs");
        touch(&faqs.join("fr.yaml"));
        touch(&faqs.join("en.yaml"));
        touch(&faqs.join("deep").join("es.yaml"));

        let pattern = format!("{}/*.yaml", faqs.display());
        let files = collect_inputs([pattern.as_str()]).unwrap();
        assert_eq!(files, vec![faqs.join("en.yaml"), faqs.join("fr.yaml")]);

        let recursive = format!("{}/**/*.yaml", faqs.display());
        assert_eq!(collect_inputs([recursive.as_str()]).unwrap().len(), 3);
    }

    #[test]
    fn test_collect_inputs_unmatched_glob_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/courses/*.yaml", dir.path().display());
        assert!(collect_inputs([pattern.as_str()]).unwrap().is_empty());
    }

    #[test]
    fn test_collect_inputs_missing_file_kept() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("courses").join("deleted_beginner_en.yaml");
        let files = collect_inputs([missing.to_str().unwrap()]).unwrap();
        assert_eq!(files, vec![missing]);
    }

    #[test]
    fn test_collect_inputs_existing_file_with_glob_syntax() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("faqs").join("en_[draft].yaml");
        touch(&file);
        let files = collect_inputs([file.to_str().unwrap()]).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_collect_inputs_keeps_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("faqs").join("en.yaml");
        touch(&file);
        let arg = file.to_str().unwrap();
        assert_eq!(collect_inputs([arg, arg]).unwrap().len(), 2);
    }

    #[test]
    fn test_collect_inputs_invalid_glob() {
        let err = collect_inputs(["/nonexistent-eazy/[z-a"]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPattern { .. }), "{err}");
    }

    #[test]
    fn test_literal_base() {
        assert_eq!(literal_base("courses/*.yaml"), PathBuf::from("courses"));
        assert_eq!(literal_base("*.yaml"), PathBuf::new());
        assert_eq!(literal_base("a/b*/c/*.yaml"), PathBuf::from("a"));
        assert_eq!(literal_base("/srv/faqs/en.yaml"), PathBuf::from("/srv/faqs"));
    }
}
