use std::fmt;

use anyhow::{Result, bail};

use crate::models::{LogField, normalize_name};

/// One configured output column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSpec {
    Field(LogField),
    /// Token that names no logical field; kept so the layout stays as configured
    Unknown(String),
}

impl ColumnSpec {
    pub fn parse(token: &str) -> Self {
        match LogField::from_name(token) {
            Some(field) => ColumnSpec::Field(field),
            None => ColumnSpec::Unknown(normalize_name(token)),
        }
    }

    /// Header text for this column
    pub fn name(&self) -> &str {
        match self {
            ColumnSpec::Field(field) => field.as_str(),
            ColumnSpec::Unknown(name) => name,
        }
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered column layout shared by the console view and exports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    columns: Vec<ColumnSpec>,
}

impl ColumnSelection {
    /// Parse a comma-separated list such as `"Timestamp, EventMessage"`
    ///
    /// Tokens are trimmed and upper-cased; empty tokens are dropped. An empty
    /// result is a configuration error.
    pub fn parse(list: &str) -> Result<Self> {
        let columns: Vec<ColumnSpec> = list
            .split(',')
            .filter(|token| !token.trim().is_empty())
            .map(ColumnSpec::parse)
            .collect();

        if columns.is_empty() {
            bail!("Column selection is empty: expected a comma-separated list of {}", all_names());
        }

        Ok(Self { columns })
    }

    pub fn from_fields<I: IntoIterator<Item = LogField>>(fields: I) -> Self {
        Self { columns: fields.into_iter().map(ColumnSpec::Field).collect() }
    }

    /// Every logical field in canonical order
    pub fn all() -> Self {
        Self::from_fields(LogField::ALL)
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(ColumnSpec::name).collect()
    }

    pub fn unknown(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().filter_map(|column| match column {
            ColumnSpec::Unknown(name) => Some(name.as_str()),
            ColumnSpec::Field(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl fmt::Display for ColumnSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}

fn all_names() -> String {
    LogField::ALL.iter().map(|field| field.as_str()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        let selection = ColumnSelection::parse(" timestamp ,EventMessage,TASKNAME").unwrap();
        assert_eq!(
            selection.columns(),
            &[
                ColumnSpec::Field(LogField::Timestamp),
                ColumnSpec::Field(LogField::EventMessage),
                ColumnSpec::Field(LogField::TaskName),
            ]
        );
        assert_eq!(selection.to_string(), "TIMESTAMP, EVENTMESSAGE, TASKNAME");
    }

    #[test]
    fn test_parse_keeps_unknown() {
        let selection = ColumnSelection::parse("severity, CallStack").unwrap();
        assert_eq!(selection.columns()[0], ColumnSpec::Unknown("SEVERITY".to_string()));
        assert_eq!(selection.unknown().collect::<Vec<_>>(), vec!["SEVERITY"]);
        assert_eq!(selection.names(), vec!["SEVERITY", "CALLSTACK"]);
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        let selection = ColumnSelection::parse("TASKNAME,TIMESTAMP,TASKNAME").unwrap();
        assert_eq!(selection.names(), vec!["TASKNAME", "TIMESTAMP", "TASKNAME"]);
    }

    #[test]
    fn test_parse_drops_empty_tokens() {
        let selection = ColumnSelection::parse("TIMESTAMP,, ,EVENTMESSAGE,").unwrap();
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(ColumnSelection::parse("").is_err());
        let err = ColumnSelection::parse(" , ,").unwrap_err();
        assert!(err.to_string().contains("Column selection is empty"));
    }

    #[test]
    fn test_all() {
        assert_eq!(ColumnSelection::all().len(), 5);
    }
}
