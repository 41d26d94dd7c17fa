//! Extension-based file categorization.
//!
//! Every file name maps to exactly one [`Category`]. The extension is the
//! suffix starting at the last `.` and is matched exactly, so `.JPG` is not
//! `.jpg`.
//!
//! # Examples
//!
//! ```
//! use tidyext::file_category::{Category, classify};
//!
//! assert_eq!(classify("holiday.png"), Category::Images);
//! assert_eq!(classify("notes.txt"), Category::Documents);
//! assert_eq!(classify("photo.JPG"), Category::Others);
//! assert_eq!(classify("Makefile"), Category::Others);
//! ```
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// One of the fixed category labels a file can be sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// .jpg, .jpeg, .png, .gif
    Images,
    /// .mov, .mkv, .mp4
    Videos,
    /// .txt, .doc, .pdf
    Documents,
    /// .js, .jsx, .py, .hs
    Programming,
    /// Everything else, including names without an extension.
    Others,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Images,
        Category::Videos,
        Category::Documents,
        Category::Programming,
        Category::Others,
    ];

    /// Returns the subdirectory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidyext::file_category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "Images");
    /// assert_eq!(Category::Others.dir_name(), "Others");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Videos => "Videos",
            Category::Documents => "Documents",
            Category::Programming => "Programming",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Maps file extensions (including the leading `.`) to categories.
#[derive(Debug, Clone)]
pub struct FileMapper {
    extension_map: HashMap<&'static str, Category>,
}

static STANDARD: LazyLock<FileMapper> = LazyLock::new(FileMapper::new);

impl FileMapper {
    /// Creates a new `FileMapper` with the standard extension table.
    pub fn new() -> Self {
        let mut mapper = Self {
            extension_map: HashMap::new(),
        };
        mapper.populate_standard_mappings();
        mapper
    }

    /// The process-wide mapper, built on first use.
    pub fn standard() -> &'static FileMapper {
        &STANDARD
    }

    fn populate_standard_mappings(&mut self) {
        const TABLE: &[(Category, &[&str])] = &[
            (Category::Images, &[".jpg", ".jpeg", ".png", ".gif"]),
            (Category::Videos, &[".mov", ".mkv", ".mp4"]),
            (Category::Documents, &[".txt", ".doc", ".pdf"]),
            (Category::Programming, &[".js", ".jsx", ".py", ".hs"]),
        ];

        for (category, extensions) in TABLE {
            for ext in *extensions {
                self.extension_map.insert(*ext, *category);
            }
        }
    }

    /// Looks up an extension such as `".pdf"`. Case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidyext::file_category::{Category, FileMapper};
    ///
    /// let mapper = FileMapper::standard();
    /// assert_eq!(mapper.extension_to_category(".pdf"), Some(Category::Documents));
    /// assert_eq!(mapper.extension_to_category(".PDF"), None);
    /// ```
    pub fn extension_to_category(&self, ext: &str) -> Option<Category> {
        self.extension_map.get(ext).copied()
    }

    /// Determines the category for a file name, falling back to
    /// [`Category::Others`].
    pub fn categorize(&self, file_name: &str) -> Category {
        extension_of(file_name)
            .and_then(|ext| self.extension_to_category(ext))
            .unwrap_or(Category::Others)
    }
}

impl Default for FileMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the suffix of `file_name` starting at its last `.`, if any.
///
/// ```
/// use tidyext::file_category::extension_of;
///
/// assert_eq!(extension_of("archive.tar.gz"), Some(".gz"));
/// assert_eq!(extension_of("noext"), None);
/// ```
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|idx| &file_name[idx..])
}

/// Classifies a file name using the standard table.
pub fn classify(file_name: &str) -> Category {
    FileMapper::standard().categorize(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_dir_names() {
        assert_eq!(Category::Images.dir_name(), "Images");
        assert_eq!(Category::Videos.dir_name(), "Videos");
        assert_eq!(Category::Documents.dir_name(), "Documents");
        assert_eq!(Category::Programming.dir_name(), "Programming");
        assert_eq!(Category::Others.dir_name(), "Others");
        assert_eq!(Category::Videos.to_string(), "Videos");
    }

    #[test]
    fn test_every_listed_extension() {
        let cases = [
            ("a.jpg", Category::Images),
            ("a.jpeg", Category::Images),
            ("a.png", Category::Images),
            ("a.gif", Category::Images),
            ("a.mov", Category::Videos),
            ("a.mkv", Category::Videos),
            ("a.mp4", Category::Videos),
            ("a.txt", Category::Documents),
            ("a.doc", Category::Documents),
            ("a.pdf", Category::Documents),
            ("a.js", Category::Programming),
            ("a.jsx", Category::Programming),
            ("a.py", Category::Programming),
            ("a.hs", Category::Programming),
        ];
        for (name, expected) in cases {
            assert_eq!(classify(name), expected, "{name}");
        }
    }

    #[test]
    fn test_unlisted_extension_is_others() {
        assert_eq!(classify("archive.zip"), Category::Others);
        assert_eq!(classify("main.rs"), Category::Others);
        assert_eq!(classify("report.docx"), Category::Others);
    }

    #[test]
    fn test_case_sensitive_match() {
        assert_eq!(classify("photo.JPG"), Category::Others);
        assert_eq!(classify("clip.Mp4"), Category::Others);
    }

    #[test]
    fn test_no_extension_is_others() {
        assert_eq!(classify("noext"), Category::Others);
        assert_eq!(classify("trailing."), Category::Others);
        assert_eq!(classify(""), Category::Others);
    }

    #[test]
    fn test_only_last_dot_counts() {
        assert_eq!(classify("backup.pdf.zip"), Category::Others);
        assert_eq!(classify("archive.zip.pdf"), Category::Documents);
    }

    #[test]
    fn test_dotfile_uses_whole_name_as_extension() {
        assert_eq!(extension_of(".py"), Some(".py"));
        assert_eq!(classify(".py"), Category::Programming);
        assert_eq!(classify(".bashrc"), Category::Others);
    }

    #[test]
    fn test_standard_mapper_is_shared() {
        assert!(std::ptr::eq(FileMapper::standard(), FileMapper::standard()));
    }
}
