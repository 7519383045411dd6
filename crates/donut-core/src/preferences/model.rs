//! Display preference models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DonutError;

/// Columns of the order table, in their default order.
pub const DEFAULT_COLUMNS: [&str; 6] = [
    "deliveryDate",
    "client",
    "category",
    "product",
    "quantity",
    "notes",
];

/// Font size used by the order tables and exports preview.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Point size rendered for this setting.
    pub fn points(self) -> u8 {
        match self {
            FontSize::Small => 12,
            FontSize::Medium => 14,
            FontSize::Large => 16,
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        };
        f.write_str(label)
    }
}

impl FromStr for FontSize {
    type Err = DonutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            other => Err(DonutError::config(format!("Unknown font size: {other}"))),
        }
    }
}

/// User display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPreferences {
    #[serde(default)]
    pub font_size: FontSize,
    /// Column keys in display order.
    pub column_order: Vec<String>,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            font_size: FontSize::default(),
            column_order: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl DisplayPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the column at `from` to index `to`.
    ///
    /// Out-of-range indices and `from == to` leave the order unchanged.
    pub fn move_column(&mut self, from: usize, to: usize) -> bool {
        let len = self.column_order.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let column = self.column_order.remove(from);
        self.column_order.insert(to, column);
        true
    }

    /// Brings a saved column list in line with the known columns.
    ///
    /// Unknown and repeated keys are dropped; known columns missing from the
    /// saved list are appended in default order.
    pub fn normalize_columns(&mut self) {
        let mut columns: Vec<String> = Vec::with_capacity(DEFAULT_COLUMNS.len());
        for column in self.column_order.drain(..) {
            if DEFAULT_COLUMNS.contains(&column.as_str()) && !columns.contains(&column) {
                columns.push(column);
            }
        }
        for column in DEFAULT_COLUMNS {
            if !columns.iter().any(|c| c == column) {
                columns.push(column.to_string());
            }
        }
        self.column_order = columns;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = DisplayPreferences::default();
        assert_eq!(prefs.font_size, FontSize::Medium);
        assert_eq!(prefs.column_order.len(), DEFAULT_COLUMNS.len());
        assert_eq!(prefs.column_order[0], "deliveryDate");
    }

    #[test]
    fn test_move_column() {
        let mut prefs = DisplayPreferences::default();
        assert!(prefs.move_column(5, 0));
        assert_eq!(prefs.column_order[0], "notes");
        assert_eq!(prefs.column_order[1], "deliveryDate");

        assert!(!prefs.move_column(0, 6));
        assert!(!prefs.move_column(2, 2));
    }

    #[test]
    fn test_normalize_columns() {
        let mut prefs = DisplayPreferences {
            font_size: FontSize::Large,
            column_order: vec![
                "notes".to_string(),
                "legacyColumn".to_string(),
                "client".to_string(),
                "notes".to_string(),
            ],
        };
        prefs.normalize_columns();

        assert_eq!(
            prefs.column_order,
            vec![
                "notes",
                "client",
                "deliveryDate",
                "category",
                "product",
                "quantity"
            ]
        );
    }

    #[test]
    fn test_font_size_parsing() {
        assert_eq!("LARGE".parse::<FontSize>().unwrap(), FontSize::Large);
        assert_eq!(FontSize::Small.to_string(), "small");
        assert_eq!(FontSize::Large.points(), 16);
        assert!("huge".parse::<FontSize>().is_err());
    }
}
