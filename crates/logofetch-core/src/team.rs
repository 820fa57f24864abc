//! One team row: normalized abbreviation plus logo URL.

use crate::schema::ColumnMap;
use crate::url_model::extension_from_url;
use csv::StringRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    /// Trimmed, uppercased; used as the file stem.
    pub abbreviation: String,
    /// Trimmed absolute URL.
    pub logo_url: String,
}

impl TeamRecord {
    /// Builds a record from a data row. Short rows read missing cells as empty.
    /// Returns `None` when either field is empty after trimming.
    pub fn from_row(row: &StringRecord, columns: &ColumnMap) -> Option<Self> {
        let abbreviation = row.get(columns.abbr).unwrap_or("").trim().to_uppercase();
        let logo_url = row.get(columns.logo).unwrap_or("").trim().to_string();
        if abbreviation.is_empty() || logo_url.is_empty() {
            return None;
        }
        Some(Self {
            abbreviation,
            logo_url,
        })
    }

    /// `{ABBR}{ext}`, extension derived from the logo URL path.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.abbreviation, extension_from_url(&self.logo_url))
    }
}
