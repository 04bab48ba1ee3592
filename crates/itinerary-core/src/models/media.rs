//! JSON-encoded media URL list stored inside the stop row.

use std::{fmt, ops::Deref, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::error::ItineraryError;

/// Ordered list of media URLs attached to a stop.
///
/// Stored as the JSON text of an array of strings. NULL or empty text in the
/// column reads back as an empty list, and an empty list is always written as
/// `[]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MediaUrls(Vec<String>);

impl MediaUrls {
    pub fn new(urls: Vec<String>) -> Self {
        Self(urls)
    }

    /// Serializes the list as a JSON array.
    pub fn to_json(&self) -> String {
        // Vec<String> always serializes.
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Deref for MediaUrls {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for MediaUrls {
    fn from(urls: Vec<String>) -> Self {
        Self(urls)
    }
}

impl FromStr for MediaUrls {
    type Err = ItineraryError;

    /// Parses caller-supplied JSON. Anything other than an array of strings
    /// is rejected, including the empty string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str::<Vec<String>>(s)
            .map(Self)
            .map_err(|e| {
                ItineraryError::invalid_input("media_urls")
                    .with_reason(format!("expected a JSON array of strings: {e}"))
            })
    }
}

impl fmt::Display for MediaUrls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl ToSql for MediaUrls {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_json()))
    }
}

impl FromSql for MediaUrls {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Self::default()),
            ValueRef::Text(text) if text.is_empty() => Ok(Self::default()),
            ValueRef::Text(text) => serde_json::from_slice::<Vec<String>>(text)
                .map(Self)
                .map_err(|e| FromSqlError::Other(Box::new(e))),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}
