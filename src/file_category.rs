/// File categorization by extension.
///
/// This module maps file extensions to named category folders. The table is
/// built once at startup and passed explicitly to classification, so tests
/// can supply their own tables.
///
/// # Examples
///
/// ```
/// use shelve::file_category::CategoryTable;
///
/// let table = CategoryTable::default();
/// assert_eq!(table.classify(".png"), "Images");
/// assert_eq!(table.classify(".PDF"), "Documents");
/// assert_eq!(table.classify(".xyz"), "Others");
/// ```
use std::collections::HashMap;

/// The fallback category for extensions not present in the table.
pub const FALLBACK_CATEGORY: &str = "Others";

/// The built-in category table, matching the destination folders the tool
/// creates by default. Extensions must stay disjoint across categories.
const DEFAULT_TABLE: &[(&str, &[&str])] = &[
    ("Images", &[".jpg", ".jpeg", ".png", ".gif", ".svg"]),
    ("Documents", &[".pdf", ".docx", ".txt", ".xlsx", ".pptx"]),
    ("Music", &[".mp3", ".wav", ".flac"]),
    ("Videos", &[".mp4", ".mov", ".avi"]),
    ("Programs", &[".exe", ".msi", ".dmg"]),
    ("Archives", &[".zip", ".rar", ".tar", ".gz"]),
];

/// Errors that can occur while building a category table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The same extension was claimed by two categories.
    DuplicateExtension {
        /// The extension that appears twice (lowercase, with leading dot).
        extension: String,
        /// The category that already owns the extension.
        first: String,
        /// The category that tried to claim it again.
        second: String,
    },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::DuplicateExtension {
                extension,
                first,
                second,
            } => write!(
                f,
                "Extension '{}' is mapped to both '{}' and '{}'",
                extension, first, second
            ),
        }
    }
}

impl std::error::Error for TableError {}

/// Maps file extensions to category folder names.
///
/// Lookups are case-insensitive; extensions are stored lowercase with their
/// leading dot. Extensions not found in any category classify as
/// [`FALLBACK_CATEGORY`].
#[derive(Debug, Clone)]
pub struct CategoryTable {
    by_extension: HashMap<String, String>,
}

impl CategoryTable {
    /// Builds a table from `(category, extensions)` entries.
    ///
    /// Extensions are lowercased on insertion. Returns an error if an
    /// extension is claimed by more than one category, so a lookup can never
    /// be ambiguous.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelve::file_category::CategoryTable;
    ///
    /// let table = CategoryTable::from_entries(&[
    ///     ("Notes", &[".md", ".org"][..]),
    /// ]).unwrap();
    /// assert_eq!(table.classify(".md"), "Notes");
    /// ```
    pub fn from_entries(entries: &[(&str, &[&str])]) -> Result<Self, TableError> {
        let mut by_extension: HashMap<String, String> = HashMap::new();
        for (category, extensions) in entries {
            for extension in *extensions {
                let key = extension.to_lowercase();
                if let Some(existing) = by_extension.get(&key) {
                    return Err(TableError::DuplicateExtension {
                        first: existing.clone(),
                        second: (*category).to_string(),
                        extension: key,
                    });
                }
                by_extension.insert(key, (*category).to_string());
            }
        }
        Ok(Self { by_extension })
    }

    /// Returns the category name owning `extension`, or [`FALLBACK_CATEGORY`].
    ///
    /// The extension is expected with its leading dot (`".jpg"`); matching is
    /// case-insensitive. An empty extension (file without one) falls back.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelve::file_category::CategoryTable;
    ///
    /// let table = CategoryTable::default();
    /// assert_eq!(table.classify(".JPG"), "Images");
    /// assert_eq!(table.classify(""), "Others");
    /// ```
    pub fn classify(&self, extension: &str) -> &str {
        self.by_extension
            .get(&extension.to_lowercase())
            .map(String::as_str)
            .unwrap_or(FALLBACK_CATEGORY)
    }

    /// Returns the distinct category names in the table, sorted.
    #[cfg(test)]
    fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_extension.values().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        // The built-in table is curated to be disjoint.
        Self::from_entries(DEFAULT_TABLE).expect("default category table has disjoint extensions")
    }
}
