//! Error types.
//!
//! Collection and profile operations never fault: an `Err` always means the
//! operation was ignored and the state is exactly as before the call.

use std::{io, path::PathBuf};

/// An error which can be returned by folio operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An add or edit session is already open.
    #[error("`{collection}` already has an active draft")]
    DraftActive {
        /// The collection name.
        collection: &'static str,
    },
    /// No add or edit session is open.
    #[error("`{collection}` has no active draft")]
    NoDraft {
        /// The collection name.
        collection: &'static str,
    },
    /// The index does not address a committed record.
    #[error("index {index} is out of range for `{collection}` with {len} records")]
    IndexOutOfRange {
        /// The collection name.
        collection: &'static str,
        /// The requested index.
        index: usize,
        /// The number of records.
        len: usize,
    },
    /// The records of the collection can only be added or removed.
    #[error("`{collection}` records can not be edited")]
    NotEditable {
        /// The collection name.
        collection: &'static str,
    },
    /// The field is not part of the record schema.
    #[error("unknown field `{field}` for `{collection}`")]
    UnknownField {
        /// The collection name.
        collection: &'static str,
        /// The field name.
        field: String,
    },
    /// The value has the wrong shape for the field.
    #[error("field `{field}` expects a {expected} value")]
    FieldType {
        /// The field name.
        field: &'static str,
        /// The expected value kind.
        expected: &'static str,
    },
    /// Required fields of the draft are blank.
    #[error("missing required fields: {}", .fields.join(", "))]
    IncompleteDraft {
        /// Names of the blank required fields.
        fields: Vec<&'static str>,
    },
    /// The config file can not be read.
    #[error("fail to read the config file `{}`: {source}", .path.display())]
    Io {
        /// The config file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The config file is not valid TOML.
    #[error("fail to parse the config file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Returns `true` if the error means the draft is missing required fields.
    #[inline]
    pub fn is_incomplete_draft(&self) -> bool {
        matches!(self, Self::IncompleteDraft { .. })
    }

    /// Returns the missing fields for an incomplete draft.
    #[inline]
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::IncompleteDraft { fields } => fields,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn it_formats_errors() {
        let err = Error::IndexOutOfRange {
            collection: "skill",
            index: 3,
            len: 1,
        };
        assert_eq!(
            err.to_string(),
            "index 3 is out of range for `skill` with 1 records"
        );

        let err = Error::IncompleteDraft {
            fields: vec!["institution", "degree"],
        };
        assert!(err.is_incomplete_draft());
        assert_eq!(err.missing_fields(), ["institution", "degree"]);
        assert_eq!(
            err.to_string(),
            "missing required fields: institution, degree"
        );
    }
}
