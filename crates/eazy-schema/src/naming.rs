//! # Filename Conventions
//!
//! Each category encodes metadata in its filenames. Patterns are anchored
//! at both ends and tested against the basename only.
//!
//! | Category | Shape                                         | Example                      |
//! |----------|-----------------------------------------------|------------------------------|
//! | courses  | `<topic>_<level>_<lang>[_<suffix>].yaml`      | `python_beginner_en.yaml`    |
//! | paths    | `<topic>[_<more>]_<lang>.yaml`                | `devops_engineer_fr.yaml`    |
//! | bootcamps| `<topic>_<more>_<lang>.yaml`                  | `cloud_native_es.yaml`       |
//! | faqs     | `<lang>[_<suffix>].yaml`                      | `fr_eazytraining.yaml`       |

use std::path::Path;
use std::sync::LazyLock;

use eazy_core::{yaml_files_in, Category};
use regex::Regex;

pub const COURSE_PATTERN: &str =
    r"^[a-z_]+_(beginner|intermediate|advanced)_(en|fr|es)(_([a-z_]+))?\.yaml$";
pub const PATH_PATTERN: &str = r"^[a-z_]+(_[a-z_]+)?_(en|fr|es)\.yaml$";
pub const BOOTCAMP_PATTERN: &str = r"^[a-z_]+_[a-z_]+_(en|fr|es)\.yaml$";
pub const FAQ_PATTERN: &str = r"^(en|fr|es)(_([a-z_]+))?\.yaml$";

static COURSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(COURSE_PATTERN).unwrap());
static PATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(PATH_PATTERN).unwrap());
static BOOTCAMP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(BOOTCAMP_PATTERN).unwrap());
static FAQ_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(FAQ_PATTERN).unwrap());

/// The compiled filename pattern of a category.
pub fn naming_pattern(category: Category) -> &'static Regex {
    match category {
        Category::Course => &COURSE_RE,
        Category::Path => &PATH_RE,
        Category::Bootcamp => &BOOTCAMP_RE,
        Category::Faq => &FAQ_RE,
    }
}

/// Returns true if `filename` (a basename) follows the category convention.
pub fn is_valid_filename(category: Category, filename: &str) -> bool {
    naming_pattern(category).is_match(filename)
}

/// Basenames of the `*.yaml` files directly in `directory` that do not
/// match `pattern`, in sorted order.
pub fn validate_names(directory: &Path, pattern: &Regex) -> Vec<String> {
    yaml_files_in(directory)
        .iter()
        .filter_map(|path| path.file_name().and_then(|n| n.to_str()))
        .filter(|name| !pattern.is_match(name))
        .map(str::to_string)
        .collect()
}

/// One file whose name breaks its category's convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingViolation {
    pub category: Category,
    /// Basename of the offending file.
    pub filename: String,
}

/// Outcome of checking every category directory under a root.
#[derive(Debug, Clone, Default)]
pub struct NamingReport {
    pub files_checked: usize,
    pub violations: Vec<NamingViolation>,
}

impl NamingReport {
    /// Returns true when every filename matched.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check the filenames of all four category directories under `root`.
pub fn validate_catalog_names(root: &Path) -> NamingReport {
    let mut report = NamingReport::default();
    for category in Category::all() {
        let dir = root.join(category.dir_name());
        report.files_checked += yaml_files_in(&dir).len();
        report.violations.extend(
            validate_names(&dir, naming_pattern(*category))
                .into_iter()
                .map(|filename| NamingViolation {
                    category: *category,
                    filename,
                }),
        );
    }
    tracing::info!(
        files = report.files_checked,
        violations = report.violations.len(),
        "filename validation finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_names() {
        for ok in [
            "python_beginner_en.yaml",
            "docker_compose_intermediate_fr.yaml",
            "terraform_advanced_es_aws.yaml",
            "k_advanced_en_extra_suffix.yaml",
        ] {
            assert!(is_valid_filename(Category::Course, ok), "{ok}");
        }
        for bad in [
            "python_beginner_xx.yaml",
            "pythonbeginner_en.yaml",
            "python_beginner_en.yml",
            "Python_beginner_en.yaml",
            "python_expert_en.yaml",
            "python-beginner-en.yaml",
            "python_beginner_en2.yaml",
        ] {
            assert!(!is_valid_filename(Category::Course, bad), "{bad}");
        }
    }

    #[test]
    fn test_path_names() {
        assert!(is_valid_filename(Category::Path, "devops_en.yaml"));
        assert!(is_valid_filename(Category::Path, "devops_engineer_fr.yaml"));
        assert!(!is_valid_filename(Category::Path, "devops.yaml"));
        assert!(!is_valid_filename(Category::Path, "devops_de.yaml"));
    }

    #[test]
    fn test_bootcamp_names() {
        assert!(is_valid_filename(Category::Bootcamp, "cloud_native_es.yaml"));
        assert!(!is_valid_filename(Category::Bootcamp, "cloud_fr.yaml"));
    }

    #[test]
    fn test_faq_names() {
        for ok in ["en.yaml", "fr_eazytraining.yaml", "es_cloud_faq.yaml"] {
            assert!(is_valid_filename(Category::Faq, ok), "{ok}");
        }
        for bad in ["english.yaml", "en-faq.yaml", "faq_en.yaml"] {
            assert!(!is_valid_filename(Category::Faq, bad), "{bad}");
        }
    }

    #[test]
    fn test_validate_names_reports_basenames() {
        let dir = tempfile::tempdir().unwrap();
        let courses = dir.path().join("courses");
        std::fs::create_dir_all(&courses).unwrap();
        for name in ["python_beginner_en.yaml", "pythonbeginner_en.yaml", "go_beginner_xx.yaml"] {
            std::fs::write(courses.join(name), b"name: x\n").unwrap();
        }

        let invalid = validate_names(&courses, naming_pattern(Category::Course));
        assert_eq!(invalid, vec!["go_beginner_xx.yaml", "pythonbeginner_en.yaml"]);
    }

    #[test]
    fn test_validate_names_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = dir.path().join("faqs");
        assert!(validate_names(&faqs, naming_pattern(Category::Faq)).is_empty());
    }
}
