//! # Script Generation
//!
//! Turns catalog record files into one SQL script of upsert statements.
//!
//! ## Failure Model
//!
//! Generation is all-or-nothing: the first file that cannot be
//! categorized, read, or parsed aborts the run, and no script is produced
//! for the files already processed.

use std::path::{Path, PathBuf};

use eazy_core::{LoadedRecord, Record};

use crate::error::SqlGenerationError;
use crate::statement::UpsertStatement;

/// Name of the script written when no output path is configured.
pub const DEFAULT_OUTPUT: &str = "eazyskills_update.sql";

/// Build the upsert statement for one loaded record.
pub fn statement_for(loaded: &LoadedRecord) -> UpsertStatement {
    let category = loaded.record.category();
    let stmt = UpsertStatement::new(category.table_name(), loaded.file_path_str());

    match &loaded.record {
        Record::Course(c) => stmt
            .column("name", &c.name)
            .column("url", &c.url)
            .column("duration_hours", c.duration_hours)
            .column("level", c.level.as_str())
            .column("objectives", &c.objectives)
            .column("description", &c.description)
            .column("prerequisites", c.prerequisites.as_deref().unwrap_or_default())
            .column("technologies", c.technologies.as_slice())
            .column("language", c.language.as_str())
            .column("deprecated", c.deprecated),
        Record::Path(p) => stmt
            .column("name", &p.name)
            .column("target_role", &p.target_role)
            .column("course_ids", p.course_ids.as_slice())
            .column("prerequisites", p.prerequisites.as_deref().unwrap_or_default())
            .column("url", p.url.as_deref().unwrap_or_default())
            .column("language", p.language.as_str())
            .column("deprecated", p.deprecated),
        Record::Bootcamp(b) => stmt
            .column("name", &b.name)
            .column("target_role", &b.target_role)
            .column("modules", b.modules.as_slice())
            .column("duration_weeks", b.duration_weeks)
            .column("prerequisites", b.prerequisites.as_deref().unwrap_or_default())
            .column("url", b.url.as_deref().unwrap_or_default())
            .column("language", b.language.as_str())
            .column("deprecated", b.deprecated),
        Record::Faq(q) => stmt
            .column("url", &q.url)
            .column("questions", q.questions.as_slice()),
    }
}

/// Load every file and build its statement, stopping at the first failure.
pub fn generate_statements<P: AsRef<Path>>(
    files: &[P],
) -> Result<Vec<UpsertStatement>, SqlGenerationError> {
    files
        .iter()
        .map(|file| -> Result<UpsertStatement, SqlGenerationError> {
            let file = file.as_ref();
            let loaded = LoadedRecord::load(file).map_err(|source| SqlGenerationError::Record {
                file: file.display().to_string(),
                source,
            })?;
            tracing::debug!(
                file = %file.display(),
                table = loaded.record.category().table_name(),
                "built statement"
            );
            Ok(statement_for(&loaded))
        })
        .collect()
}

/// Join statements into one script, one statement per record.
pub fn render_script(statements: &[UpsertStatement]) -> String {
    statements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate the full script text for `files`.
pub fn generate<P: AsRef<Path>>(files: &[P]) -> Result<String, SqlGenerationError> {
    let statements = generate_statements(files)?;
    tracing::info!(statements = statements.len(), "generated SQL script");
    Ok(render_script(&statements))
}

/// Write a finished script to `output`, replacing any existing file.
pub fn write_script(output: &Path, script: &str) -> Result<(), SqlGenerationError> {
    std::fs::write(output, script).map_err(|source| SqlGenerationError::Write {
        path: output.display().to_string(),
        source,
    })
}

/// Resolve the output path: `output` if given, otherwise
/// [`DEFAULT_OUTPUT`] in the working directory.
pub fn output_path(output: Option<&Path>) -> PathBuf {
    output.map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), Path::to_path_buf)
}
