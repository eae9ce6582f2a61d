/// Extension-based file categorization.
///
/// This module maps file extensions to named categories ("Documents",
/// "Images", ...) using a fixed table built at startup. Lookup is
/// case-insensitive and first-match-wins if two categories ever claim
/// the same extension.
///
/// # Examples
///
/// ```
/// use dirsort::category::CategoryTable;
///
/// let table = CategoryTable::default();
/// assert_eq!(table.category_for("pdf"), Some("Documents"));
/// assert_eq!(table.category_for("PNG"), Some("Images"));
/// assert_eq!(table.category_for("xyz"), None);
/// ```
use std::collections::HashMap;

/// A fixed table mapping file extensions to category names.
///
/// The table holds an ordered list of categories, each registered with the
/// extensions it recognizes. Extensions are normalized to lowercase on
/// registration and on lookup, so matching is case-insensitive. An extension
/// already claimed by an earlier category keeps its original mapping.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    names: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl CategoryTable {
    /// Creates a table with no categories registered.
    pub fn empty() -> Self {
        Self {
            names: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Creates a table with the standard category set.
    pub fn new() -> Self {
        let mut table = Self::empty();
        table.populate_standard_categories();
        table
    }

    fn populate_standard_categories(&mut self) {
        self.add_category("Documents", &["pdf", "doc", "docx", "txt", "rtf"]);
        self.add_category("Images", &["jpg", "jpeg", "png", "gif", "bmp", "svg"]);
        self.add_category("Videos", &["mp4", "avi", "mkv", "mov", "wmv"]);
        self.add_category("Music", &["mp3", "wav", "flac", "aac", "ogg"]);
        self.add_category("Archives", &["zip", "rar", "7z", "tar", "gz"]);
        self.add_category("Programs", &["exe", "msi", "bat", "sh", "app"]);
        self.add_category("HTML", &["html", "htm"]);
        self.add_category("CSS", &["css"]);
        self.add_category("JavaScript", &["js"]);
        self.add_category("Python", &["py"]);
        self.add_category("Java", &["java"]);
        self.add_category("C++", &["cpp", "h"]);
        self.add_category("C#", &["cs"]);
        self.add_category("PHP", &["php"]);
        self.add_category("Ruby", &["rb"]);
        self.add_category("Swift", &["swift"]);
        self.add_category("Go", &["go"]);
        self.add_category("Kotlin", &["kt"]);
        self.add_category("Rust", &["rs"]);
        self.add_category("TypeScript", &["ts"]);
        self.add_category("SQL", &["sql"]);
        self.add_category("XML", &["xml"]);
        self.add_category("JSON", &["json"]);
        self.add_category("YAML", &["yaml", "yml"]);
    }

    /// Registers a category with its recognized extensions.
    ///
    /// Extensions are stored lowercase, without the leading dot. An extension
    /// already registered by an earlier category is left untouched, so the
    /// first registration wins.
    pub fn add_category(&mut self, name: &str, extensions: &[&str]) {
        let index = self.names.len();
        self.names.push(name.to_string());
        for ext in extensions {
            let key = ext.trim_start_matches('.').to_lowercase();
            self.lookup.entry(key).or_insert(index);
        }
    }

    /// Returns the category name for a file extension, if one is registered.
    ///
    /// The extension may be given in any case, with or without a leading dot.
    /// The empty extension never matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::category::CategoryTable;
    ///
    /// let table = CategoryTable::default();
    /// assert_eq!(table.category_for(".tar"), Some("Archives"));
    /// assert_eq!(table.category_for("Mp3"), Some("Music"));
    /// assert_eq!(table.category_for(""), None);
    /// ```
    pub fn category_for(&self, extension: &str) -> Option<&str> {
        let key = extension.trim_start_matches('.').to_lowercase();
        if key.is_empty() {
            return None;
        }
        self.lookup.get(&key).map(|&index| self.names[index].as_str())
    }

    /// Returns the category names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookups() {
        let table = CategoryTable::default();
        assert_eq!(table.category_for("pdf"), Some("Documents"));
        assert_eq!(table.category_for("txt"), Some("Documents"));
        assert_eq!(table.category_for("png"), Some("Images"));
        assert_eq!(table.category_for("mp4"), Some("Videos"));
        assert_eq!(table.category_for("mp3"), Some("Music"));
        assert_eq!(table.category_for("zip"), Some("Archives"));
        assert_eq!(table.category_for("rs"), Some("Rust"));
        assert_eq!(table.category_for("yml"), Some("YAML"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = CategoryTable::default();
        assert_eq!(table.category_for("JPG"), Some("Images"));
        assert_eq!(table.category_for("Jpg"), Some("Images"));
        assert_eq!(table.category_for("PDF"), Some("Documents"));
    }

    #[test]
    fn test_leading_dot_is_accepted() {
        let table = CategoryTable::default();
        assert_eq!(table.category_for(".txt"), Some("Documents"));
        assert_eq!(table.category_for(".GIF"), Some("Images"));
    }

    #[test]
    fn test_unknown_extension_has_no_category() {
        let table = CategoryTable::default();
        assert_eq!(table.category_for("xyz"), None);
        assert_eq!(table.category_for("123"), None);
    }

    #[test]
    fn test_empty_extension_never_matches() {
        let table = CategoryTable::default();
        assert_eq!(table.category_for(""), None);
        assert_eq!(table.category_for("."), None);
    }

    #[test]
    fn test_first_registration_wins() {
        let mut table = CategoryTable::empty();
        table.add_category("Scripts", &["sh"]);
        table.add_category("Programs", &["sh", "exe"]);

        assert_eq!(table.category_for("sh"), Some("Scripts"));
        assert_eq!(table.category_for("exe"), Some("Programs"));
    }

    #[test]
    fn test_names_preserve_registration_order() {
        let mut table = CategoryTable::empty();
        table.add_category("Documents", &["pdf"]);
        table.add_category("Images", &["png"]);
        table.add_category("Archives", &["zip"]);

        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec!["Documents", "Images", "Archives"]);
    }

    #[test]
    fn test_empty_table_matches_nothing() {
        let table = CategoryTable::empty();
        assert_eq!(table.category_for("pdf"), None);
    }
}
