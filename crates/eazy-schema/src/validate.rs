//! # Record Validation
//!
//! Checks catalog records for structural correctness before they reach the
//! SQL generator.
//!
//! ## Checks
//!
//! Per file, in reporting order:
//!
//! 1. The file reads and parses as a YAML mapping.
//! 2. Every required field of the category is present (one violation per
//!    missing field).
//! 3. Every present field has the shape the SQL generator loads: text,
//!    counts, booleans and lists (see [`FieldShape`]).
//! 4. `level` (courses) and `language` (courses, paths, bootcamps) hold a
//!    known value.
//! 5. Course `technologies` are all on the allowlist.
//! 6. FAQ `questions` is a non-empty list of strings.
//! 7. `name` has not already been claimed by an earlier file in the run.
//!
//! A record that passes checks 1 to 6 under the standard field tables
//! loads as a typed [`eazy_core::Record`].
//!
//! ## Failure Model
//!
//! Validation never stops early. Every file is checked and every finding
//! is returned, so a single CI run shows the full list.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use eazy_core::{category_files, technology, Category, Language, Level};
use serde_yaml::Value;

/// What is wrong with a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The file could not be read.
    Unreadable(String),
    /// The file is not valid YAML.
    YamlParse(String),
    /// The document parsed but is not a key/value mapping.
    NotAMapping,
    /// A required field is absent.
    MissingField(String),
    /// A vocabulary field holds an unknown value.
    InvalidValue {
        /// Field name.
        field: &'static str,
        /// The value as written.
        value: String,
    },
    /// Course technologies outside the allowlist, in declaration order.
    InvalidTechnologies(Vec<String>),
    /// A field is present with the wrong shape.
    WrongType {
        /// Field name.
        field: &'static str,
        /// Expected shape, e.g. "a list of strings".
        expected: &'static str,
    },
    /// `name` was already used by an earlier file.
    DuplicateName {
        /// The repeated name.
        name: String,
        /// The file that introduced it.
        first_file: PathBuf,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(cause) => write!(f, "Read error: {cause}"),
            Self::YamlParse(cause) => write!(f, "YAML parsing error: {cause}"),
            Self::NotAMapping => f.write_str("Document is not a mapping"),
            Self::MissingField(field) => write!(f, "Missing field '{field}'"),
            Self::InvalidValue { field, value } => write!(f, "Invalid {field} '{value}'"),
            Self::InvalidTechnologies(tags) => {
                write!(f, "Invalid technologies - {}", tags.join(", "))
            }
            Self::WrongType { field, expected } => {
                write!(f, "Field '{field}' must be {expected}")
            }
            Self::DuplicateName { name, first_file } => {
                write!(f, "Duplicate name '{name}' found in {}", first_file.display())
            }
        }
    }
}

/// A single finding, attributed to the file it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The offending file.
    pub file: PathBuf,
    /// What is wrong with it.
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.kind)
    }
}

/// Outcome of validating a set of files.
#[derive(Debug, Clone, Default)]
pub struct FormatReport {
    /// Number of files examined.
    pub files_checked: usize,
    /// Every finding, in processing order.
    pub violations: Vec<Violation>,
}

impl FormatReport {
    /// Returns true when no file had a finding.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// First file to claim each `name` within one run.
#[derive(Debug, Default)]
struct NameRegistry {
    first_seen: HashMap<String, PathBuf>,
}

impl NameRegistry {
    /// Claim `name` for `file`, returning the earlier owner if there is one.
    fn claim(&mut self, name: String, file: &Path) -> Option<&Path> {
        use std::collections::hash_map::Entry;
        match self.first_seen.entry(name) {
            Entry::Occupied(owner) => Some(owner.into_mut().as_path()),
            Entry::Vacant(slot) => {
                slot.insert(file.to_path_buf());
                None
            }
        }
    }
}

const LIST_OF_STRINGS: &str = "a list of strings";
const NON_EMPTY_LIST_OF_STRINGS: &str = "a non-empty list of strings";

/// The value shape a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// A string.
    Text,
    /// A string, or null when the field is left empty.
    OptionalText,
    /// A non-negative integer that fits in 32 bits.
    Count,
    /// `true` or `false`.
    Flag,
    /// A list whose items are all strings.
    TextList,
    /// A list whose items are strings or integers.
    ItemList,
}

impl FieldShape {
    /// Description used in `Field '<f>' must be <expected>`.
    pub fn expected(self) -> &'static str {
        match self {
            Self::Text | Self::OptionalText => "a string",
            Self::Count => "a non-negative integer",
            Self::Flag => "a boolean",
            Self::TextList => LIST_OF_STRINGS,
            Self::ItemList => "a list of strings or integers",
        }
    }

    /// Returns true if `value` has this shape.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Text => value.is_string(),
            Self::OptionalText => value.is_null() || value.is_string(),
            Self::Count => value.as_u64().is_some_and(|n| u32::try_from(n).is_ok()),
            Self::Flag => value.is_bool(),
            Self::TextList => value
                .as_sequence()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            Self::ItemList => value.as_sequence().is_some_and(|items| {
                items
                    .iter()
                    .all(|item| item.is_string() || item.as_i64().is_some())
            }),
        }
    }
}

const COURSE_SHAPES: &[(&str, FieldShape)] = &[
    ("name", FieldShape::Text),
    ("url", FieldShape::Text),
    ("duration_hours", FieldShape::Count),
    ("objectives", FieldShape::Text),
    ("description", FieldShape::Text),
    ("prerequisites", FieldShape::OptionalText),
    ("technologies", FieldShape::TextList),
    ("deprecated", FieldShape::Flag),
];

const PATH_SHAPES: &[(&str, FieldShape)] = &[
    ("name", FieldShape::Text),
    ("target_role", FieldShape::Text),
    ("course_ids", FieldShape::ItemList),
    ("prerequisites", FieldShape::OptionalText),
    ("url", FieldShape::OptionalText),
    ("deprecated", FieldShape::Flag),
];

const BOOTCAMP_SHAPES: &[(&str, FieldShape)] = &[
    ("name", FieldShape::Text),
    ("target_role", FieldShape::Text),
    ("modules", FieldShape::ItemList),
    ("duration_weeks", FieldShape::Count),
    ("prerequisites", FieldShape::OptionalText),
    ("url", FieldShape::OptionalText),
    ("deprecated", FieldShape::Flag),
];

// `questions` has its own check with a stricter message.
const FAQ_SHAPES: &[(&str, FieldShape)] = &[("url", FieldShape::Text)];

/// Field shapes of a category. `level` and `language` are checked
/// against their vocabularies instead.
pub fn field_shapes(category: Category) -> &'static [(&'static str, FieldShape)] {
    match category {
        Category::Course => COURSE_SHAPES,
        Category::Path => PATH_SHAPES,
        Category::Bootcamp => BOOTCAMP_SHAPES,
        Category::Faq => FAQ_SHAPES,
    }
}

/// Validates catalog records against per-category required-field tables.
///
/// The default tables come from [`Category::required_fields`]; callers may
/// replace a category's table with [`SchemaValidator::with_required_fields`].
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    required: BTreeMap<Category, Vec<String>>,
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaValidator {
    /// Create a validator using the catalog's standard field tables.
    pub fn new() -> Self {
        let required = Category::all()
            .iter()
            .map(|c| (*c, c.required_fields().iter().map(|f| f.to_string()).collect()))
            .collect();
        Self { required }
    }

    /// Replace the required-field table of one category.
    pub fn with_required_fields<I, S>(mut self, category: Category, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required
            .insert(category, fields.into_iter().map(Into::into).collect());
        self
    }

    /// The required fields of `category`, in reporting order.
    pub fn required_fields(&self, category: Category) -> &[String] {
        self.required.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Validate every record file found under the fixed catalog layout
    /// rooted at `root`.
    ///
    /// Categories are processed in [`Category::all`] order, files within a
    /// category in sorted order.
    pub fn validate_catalog(&self, root: &Path) -> FormatReport {
        let files: Vec<(Category, PathBuf)> = Category::all()
            .iter()
            .flat_map(|c| category_files(root, *c).into_iter().map(move |p| (*c, p)))
            .collect();
        self.validate_files(&files)
    }

    /// Validate caller-supplied files, in the order given.
    ///
    /// Name uniqueness is tracked across the whole slice, regardless of
    /// category.
    pub fn validate_files(&self, files: &[(Category, PathBuf)]) -> FormatReport {
        let mut registry = NameRegistry::default();
        let mut report = FormatReport::default();

        for (category, path) in files {
            let before = report.violations.len();
            self.validate_file(*category, path, &mut registry, &mut report.violations);
            report.files_checked += 1;
            tracing::debug!(
                file = %path.display(),
                %category,
                violations = report.violations.len() - before,
                "validated record"
            );
        }

        tracing::info!(
            files = report.files_checked,
            violations = report.violations.len(),
            "catalog format validation finished"
        );
        report
    }

    fn validate_file(
        &self,
        category: Category,
        path: &Path,
        registry: &mut NameRegistry,
        out: &mut Vec<Violation>,
    ) {
        let mut push = |kind| {
            out.push(Violation {
                file: path.to_path_buf(),
                kind,
            })
        };

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => return push(ViolationKind::Unreadable(e.to_string())),
        };
        let doc: Value = match serde_yaml::from_str(&content) {
            Ok(v) => v,
            Err(e) => return push(ViolationKind::YamlParse(e.to_string())),
        };
        if !doc.is_mapping() {
            return push(ViolationKind::NotAMapping);
        }

        for kind in self.check_document(category, &doc) {
            push(kind);
        }

        if category.has_unique_name() {
            if let Some(name) = doc.get("name").map(scalar_text) {
                if let Some(first_file) = registry.claim(name.clone(), path) {
                    push(ViolationKind::DuplicateName {
                        name,
                        first_file: first_file.to_path_buf(),
                    });
                }
            }
        }
    }

    /// Run the per-document checks that need no cross-file state.
    fn check_document(&self, category: Category, doc: &Value) -> Vec<ViolationKind> {
        let mut found: Vec<ViolationKind> = self
            .required_fields(category)
            .iter()
            .filter(|field| doc.get(field.as_str()).is_none())
            .map(|field| ViolationKind::MissingField(field.clone()))
            .collect();

        found.extend(field_shapes(category).iter().filter_map(|(field, shape)| {
            let value = doc.get(*field)?;
            (!shape.accepts(value)).then(|| ViolationKind::WrongType {
                field: *field,
                expected: shape.expected(),
            })
        }));

        match category {
            Category::Course => {
                found.extend(check_vocabulary::<Level>(doc, "level"));
                found.extend(check_vocabulary::<Language>(doc, "language"));
                found.extend(check_technologies(doc));
            }
            Category::Path | Category::Bootcamp => {
                found.extend(check_vocabulary::<Language>(doc, "language"));
            }
            Category::Faq => {
                let listed = self
                    .required_fields(category)
                    .iter()
                    .any(|f| f == "questions");
                found.extend(check_questions(doc, listed));
            }
        }
        found
    }
}

/// Textual form of a scalar, as it would appear in the source file.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn check_vocabulary<T: std::str::FromStr>(
    doc: &Value,
    field: &'static str,
) -> Option<ViolationKind> {
    let value = doc.get(field)?;
    let known = value.as_str().is_some_and(|s| s.parse::<T>().is_ok());
    (!known).then(|| ViolationKind::InvalidValue {
        field,
        value: scalar_text(value),
    })
}

/// Allowlist check over the string items of `technologies`. A value of
/// the wrong shape is reported by the field shape check.
fn check_technologies(doc: &Value) -> Option<ViolationKind> {
    let items = doc.get("technologies")?.as_sequence()?;
    let invalid: Vec<String> =
        technology::invalid_technologies(items.iter().filter_map(Value::as_str))
            .into_iter()
            .map(str::to_string)
            .collect();
    (!invalid.is_empty()).then_some(ViolationKind::InvalidTechnologies(invalid))
}

/// `questions` must be a non-empty list of strings. When the field is
/// absent and the required-field table did not already report it, the
/// absence is reported here.
fn check_questions(doc: &Value, already_required: bool) -> Option<ViolationKind> {
    let Some(value) = doc.get("questions") else {
        return (!already_required).then(|| ViolationKind::MissingField("questions".into()));
    };
    let well_formed = value
        .as_sequence()
        .is_some_and(|items| !items.is_empty() && items.iter().all(Value::is_string));
    (!well_formed).then_some(ViolationKind::WrongType {
        field: "questions",
        expected: NON_EMPTY_LIST_OF_STRINGS,
    })
}
