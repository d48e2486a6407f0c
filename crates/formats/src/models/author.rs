use crate::consts::UNKNOWN_AUTHOR;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// One credited author: the name shown in the UI plus the key used for
/// alphabetical grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SingleAuthor {
    pub display_name: String,
    pub sort_key: String,
}

impl SingleAuthor {
    pub fn new(display_name: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            sort_key: sort_key.into(),
        }
    }

    /// The canonical credit for books where extraction produced nothing.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_AUTHOR, UNKNOWN_AUTHOR)
    }
}

/// Author credit of a book: either a single author or an ordered list of
/// several. Promotion from `Single` to `Multi` happens through
/// [`BookRecord::add_author`](super::BookRecord::add_author).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Author {
    Single(SingleAuthor),
    Multi(Vec<SingleAuthor>),
}

impl Author {
    /// Name shown in the UI; multiple authors are joined with `", "`.
    pub fn display_name(&self) -> String {
        match self {
            Self::Single(author) => author.display_name.clone(),
            Self::Multi(authors) => {
                authors.iter().map(|a| a.display_name.as_str()).collect::<Vec<_>>().join(", ")
            },
        }
    }

    /// Sort key; a multi-author credit sorts under its first author.
    pub fn sort_key(&self) -> &str {
        match self {
            Self::Single(author) => &author.sort_key,
            Self::Multi(authors) => authors.first().map(|a| a.sort_key.as_str()).unwrap_or(""),
        }
    }

    /// All credited authors, in order.
    pub fn authors(&self) -> &[SingleAuthor] {
        match self {
            Self::Single(author) => std::slice::from_ref(author),
            Self::Multi(authors) => authors,
        }
    }
}

impl From<SingleAuthor> for Author {
    fn from(author: SingleAuthor) -> Self {
        Self::Single(author)
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_author_has_display_name() {
        let unknown = SingleAuthor::unknown();
        assert!(!unknown.display_name.is_empty());
        assert!(!unknown.sort_key.is_empty());
    }

    #[test]
    fn test_multi_display_name_joins() {
        let credit = Author::Multi(vec![
            SingleAuthor::new("Jane Doe", "Doe"),
            SingleAuthor::new("John Smith", "Smith"),
        ]);
        assert_eq!(credit.display_name(), "Jane Doe, John Smith");
        assert_eq!(credit.sort_key(), "Doe");
    }

    #[test]
    fn test_authors_slice() {
        let single = Author::Single(SingleAuthor::new("Jane Doe", "Doe"));
        assert_eq!(single.authors().len(), 1);
        let multi = Author::Multi(vec![
            SingleAuthor::new("A", "A"),
            SingleAuthor::new("B", "B"),
        ]);
        assert_eq!(multi.authors().len(), 2);
    }
}
