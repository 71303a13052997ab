//! # Upsert Statements
//!
//! One parameterized builder serves every catalog table. A statement is a
//! table name plus an ordered list of `(column, value)` pairs; the first
//! column is the conflict key and every other column is reassigned from
//! `EXCLUDED` on conflict.
//!
//! ## Text Escaping
//!
//! Values are interpolated as SQL literals, not bound parameters. Every
//! single quote inside a text value (including text items of an array) is
//! replaced by a space before quoting. This substitution is lossy and is
//! kept as-is because downstream consumers of the generated script expect
//! exactly this output.

use std::fmt;

use eazy_core::ListItem;

/// Column every catalog table resolves conflicts on.
pub const CONFLICT_KEY: &str = "file_path";

/// Make `s` safe to place between single quotes.
pub fn escape_text(s: &str) -> String {
    s.replace('\'', " ")
}

/// A literal value in a generated statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Quoted, escaped text.
    Text(String),
    /// Unquoted integer.
    Integer(i64),
    /// `TRUE` / `FALSE`.
    Bool(bool),
    /// `ARRAY[...]` of the rendered items.
    Array(Vec<SqlValue>),
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "'{}'", escape_text(s)),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            Self::Array(items) => {
                f.write_str("ARRAY[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<&String> for SqlValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u32> for SqlValue {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<&ListItem> for SqlValue {
    fn from(item: &ListItem) -> Self {
        match item {
            ListItem::Integer(n) => Self::Integer(*n),
            ListItem::Text(s) => Self::Text(s.clone()),
        }
    }
}

impl<T> From<&[T]> for SqlValue
where
    for<'a> &'a T: Into<SqlValue>,
{
    fn from(items: &[T]) -> Self {
        Self::Array(items.iter().map(Into::into).collect())
    }
}

/// `INSERT ... ON CONFLICT (file_path) DO UPDATE SET ...` for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertStatement {
    table: &'static str,
    columns: Vec<(&'static str, SqlValue)>,
}

impl UpsertStatement {
    /// Start a statement for `table` keyed on `file_path`.
    pub fn new(table: &'static str, file_path: impl Into<String>) -> Self {
        Self {
            table,
            columns: vec![(CONFLICT_KEY, SqlValue::Text(file_path.into()))],
        }
    }

    /// Append a column. Columns render in insertion order.
    pub fn column(mut self, name: &'static str, value: impl Into<SqlValue>) -> Self {
        self.columns.push((name, value.into()));
        self
    }

    /// The target table.
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Column names, conflict key first.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|(name, _)| *name)
    }
}

impl fmt::Display for UpsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.column_names().collect();
        let values: Vec<String> = self.columns.iter().map(|(_, v)| v.to_string()).collect();
        writeln!(f, "INSERT INTO {} ({})", self.table, names.join(", "))?;
        writeln!(f, "VALUES ({})", values.join(", "))?;

        let updates: Vec<&str> = names.iter().copied().filter(|n| *n != CONFLICT_KEY).collect();
        if updates.is_empty() {
            return write!(f, "ON CONFLICT ({CONFLICT_KEY}) DO NOTHING;");
        }
        writeln!(f, "ON CONFLICT ({CONFLICT_KEY}) DO UPDATE SET")?;
        for (i, name) in updates.iter().enumerate() {
            let terminator = if i + 1 == updates.len() { ";" } else { "," };
            write!(f, "    {name} = EXCLUDED.{name}{terminator}")?;
            if i + 1 < updates.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_replaces_quotes_with_spaces() {
        assert_eq!(escape_text("learner's guide"), "learner s guide");
        assert_eq!(escape_text("''"), "  ");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn test_value_rendering() {
        assert_eq!(<SqlValue as From<&str>>::from("it's").to_string(), "'it s'");
        assert_eq!(<SqlValue as From<u32>>::from(10u32).to_string(), "10");
        assert_eq!(<SqlValue as From<bool>>::from(true).to_string(), "TRUE");
        assert_eq!(<SqlValue as From<bool>>::from(false).to_string(), "FALSE");
    }

    #[test]
    fn test_array_rendering() {
        let tags = vec!["python".to_string(), "docker".to_string()];
        assert_eq!(
            <SqlValue as From<&[String]>>::from(tags.as_slice()).to_string(),
            "ARRAY['python', 'docker']"
        );

        let ids = vec![ListItem::Integer(1), ListItem::Text("o'reilly".into())];
        assert_eq!(<SqlValue as From<&[ListItem]>>::from(ids.as_slice()).to_string(), "ARRAY[1, 'o reilly']");

        let empty: Vec<String> = Vec::new();
        assert_eq!(<SqlValue as From<&[String]>>::from(empty.as_slice()).to_string(), "ARRAY[]");
    }

    #[test]
    fn test_statement_shape() {
        let stmt = UpsertStatement::new("faqs", "faqs/en.yaml")
            .column("url", "https://x/faq")
            .column("questions", ["Why?".to_string()].as_slice());
        assert_eq!(
            stmt.to_string(),
            "INSERT INTO faqs (file_path, url, questions)\n\
             VALUES ('faqs/en.yaml', 'https://x/faq', ARRAY['Why?'])\n\
             ON CONFLICT (file_path) DO UPDATE SET\n    \
             url = EXCLUDED.url,\n    \
             questions = EXCLUDED.questions;"
        );
    }

    #[test]
    fn test_key_only_statement_does_nothing_on_conflict() {
        let stmt = UpsertStatement::new("faqs", "faqs/en.yaml");
        assert!(stmt.to_string().ends_with("ON CONFLICT (file_path) DO NOTHING;"));
    }

    proptest! {
        #[test]
        fn rendered_text_has_only_delimiting_quotes(s in ".*") {
            let rendered = <SqlValue as From<&str>>::from(s.as_str()).to_string();
            prop_assert!(rendered.starts_with('\''));
            prop_assert!(rendered.ends_with('\''));
            prop_assert_eq!(rendered.matches('\'').count(), 2);
        }
    }
}
