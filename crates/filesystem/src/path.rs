//! Book path model.
//!
//! A book is addressed by a string path. A book stored inside an archive
//! container uses the `container.zip:entry` convention inherited from the
//! reader's persisted settings, so the same string works as both the cache
//! key and the per-file option scope.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Extensions recognised as archive containers for entry splitting.
///
/// Only these trigger `container:entry` parsing, which keeps Windows drive
/// prefixes and stray colons in ordinary file names intact.
const ARCHIVE_EXTENSIONS: [&str; 4] = ["zip", "tar", "tgz", "tar.gz"];

/// Path identifying one book file, possibly an entry inside an archive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookPath(String);

impl BookPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into `(container, entry)` when the path addresses an archive
    /// member. Delimiters at index 0 or 1 are skipped so `C:\books\x.zip`
    /// is never mistaken for an archive entry.
    fn split_entry(&self) -> Option<(&str, &str)> {
        for (index, _) in self.0.match_indices(':') {
            if index <= 1 {
                continue;
            }
            let container = &self.0[..index];
            if has_archive_extension(container) {
                return Some((container, &self.0[index + 1..]));
            }
        }
        None
    }

    /// The real on-disk file after resolving archive indirection.
    ///
    /// `shelf/books.zip:novel.fb2` resolves to `shelf/books.zip`; plain
    /// paths resolve to themselves.
    pub fn physical(&self) -> BookPath {
        match self.split_entry() {
            Some((container, _)) => BookPath::new(container),
            None => self.clone(),
        }
    }

    /// The archive-member part of the path, if any.
    pub fn entry(&self) -> Option<&str> {
        self.split_entry().map(|(_, entry)| entry)
    }

    pub fn is_archive_entry(&self) -> bool {
        self.split_entry().is_some()
    }

    /// Base file name of the addressed file: the entry name for archive
    /// members, the last path component otherwise.
    fn addressed_name(&self) -> &str {
        let addressed = match self.split_entry() {
            Some((_, entry)) => entry,
            None => &self.0,
        };
        addressed.rsplit(['/', '\\']).next().unwrap_or(addressed)
    }

    /// Lower-cased extension of the addressed file, or an empty string.
    pub fn extension(&self) -> String {
        match self.addressed_name().rsplit_once('.') {
            Some((stem, extension)) if !stem.is_empty() && !extension.is_empty() => {
                extension.to_ascii_lowercase()
            },
            _ => String::new(),
        }
    }

    /// Base name of the addressed file for display purposes, with or
    /// without its extension.
    pub fn display_name(&self, with_extension: bool) -> String {
        let name = self.addressed_name();
        if with_extension {
            return name.to_string();
        }
        let extension = self.extension();
        match extension.is_empty() {
            true => name.to_string(),
            // The extension is ASCII-lowercased, so its byte length matches
            // the original suffix.
            false => name[..name.len() - extension.len() - 1].to_string(),
        }
    }
}

// Suffix matching rather than a last-dot split, because `tar.gz` spans
// two dots.
fn has_archive_extension(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    ARCHIVE_EXTENSIONS.iter().any(|extension| {
        lower
            .strip_suffix(extension)
            .is_some_and(|stem| stem.ends_with('.') && stem.len() > 1)
    })
}

impl From<&str> for BookPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
impl From<String> for BookPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
impl From<&BookPath> for BookPath {
    fn from(path: &BookPath) -> Self {
        path.clone()
    }
}
impl AsRef<str> for BookPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for BookPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("shelf/books.zip:novel.fb2", "shelf/books.zip")]
    #[case("archive.tar:dir/story.txt", "archive.tar")]
    #[case("bundle.tgz:a.epub", "bundle.tgz")]
    #[case("shelf/pack.tar.gz:novel.fb2", "shelf/pack.tar.gz")]
    #[case("plain/book.epub", "plain/book.epub")]
    #[case("no-extension", "no-extension")]
    #[case("C:\\books\\title.epub", "C:\\books\\title.epub")]
    #[case("C:\\books\\pack.zip:inner.fb2", "C:\\books\\pack.zip")]
    fn test_physical(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(BookPath::new(path).physical(), BookPath::new(expected));
    }

    #[rstest]
    #[case("shelf/books.zip:novel.fb2", Some("novel.fb2"))]
    #[case("shelf/pack.tar.gz:novel.fb2", Some("novel.fb2"))]
    #[case("plain/book.epub", None)]
    // A colon after a non-archive extension is part of the name.
    #[case("notes.txt:oddity", None)]
    // A bare `.gz` is not a container on its own.
    #[case("notes.gz:oddity", None)]
    fn test_entry(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(BookPath::new(path).entry(), expected);
    }

    #[rstest]
    #[case("book.FB2", "fb2")]
    #[case("shelf/books.zip:novel.fb2", "fb2")]
    #[case("dir/story.txt", "txt")]
    #[case("dir/.hidden", "")]
    #[case("no-extension", "")]
    #[case("trailing.", "")]
    fn test_extension(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(BookPath::new(path).extension(), expected);
    }

    #[rstest]
    #[case("shelf/My Novel.txt", true, "My Novel.txt")]
    #[case("shelf/My Novel.txt", false, "My Novel")]
    #[case("shelf/books.zip:novel.fb2", true, "novel.fb2")]
    #[case("shelf/books.zip:novel.fb2", false, "novel")]
    #[case("no-extension", false, "no-extension")]
    #[case("UPPER.TXT", false, "UPPER")]
    fn test_display_name(#[case] path: &str, #[case] with_extension: bool, #[case] expected: &str) {
        assert_eq!(BookPath::new(path).display_name(with_extension), expected);
    }

    #[test]
    fn test_physical_of_plain_path_is_identity() {
        let path = BookPath::new("library/title.epub");
        assert_eq!(path.physical(), path);
        assert!(!path.is_archive_entry());
    }
}
