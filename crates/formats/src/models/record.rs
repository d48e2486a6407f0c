use super::{Author, SingleAuthor};
use folio_filesystem::BookPath;

/// Largest meaningful position within a sequence.
pub const MAX_NUMBER_IN_SEQUENCE: u32 = 100;

/// In-memory catalog metadata for one book, keyed by its file path.
///
/// The path is the record's identity and cannot change after construction;
/// every other field mutates only through the narrow API below. The number
/// in sequence is meaningful only while the sequence name is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    path: BookPath,
    author: Option<Author>,
    title: String,
    sequence_name: String,
    number_in_sequence: u32,
    language: String,
    encoding: String,
}

impl BookRecord {
    /// A blank record: no author, empty title and sequence, no language or
    /// encoding. Loaders fill it in afterwards.
    pub fn new(path: impl Into<BookPath>) -> Self {
        Self {
            path: path.into(),
            author: None,
            title: String::new(),
            sequence_name: String::new(),
            number_in_sequence: 0,
            language: String::new(),
            encoding: String::new(),
        }
    }

    pub fn path(&self) -> &BookPath {
        &self.path
    }

    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sequence_name(&self) -> &str {
        &self.sequence_name
    }

    pub fn number_in_sequence(&self) -> u32 {
        self.number_in_sequence
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_sequence_name(&mut self, sequence_name: impl Into<String>) {
        self.sequence_name = sequence_name.into();
    }

    /// Clamped to `0..=MAX_NUMBER_IN_SEQUENCE`.
    pub fn set_number_in_sequence(&mut self, number: u32) {
        self.number_in_sequence = number.min(MAX_NUMBER_IN_SEQUENCE);
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn set_encoding(&mut self, encoding: impl Into<String>) {
        self.encoding = encoding.into();
    }

    /// Replace the author credit wholesale. Loaders use this to install a
    /// persisted or default credit; incremental edits go through
    /// [`add_author`](Self::add_author).
    pub fn set_author(&mut self, author: Author) {
        self.author = Some(author);
    }

    pub fn clear_author(&mut self) {
        self.author = None;
    }

    /// Append one author to the credit.
    ///
    /// Both inputs are trimmed; an empty name is a no-op. An empty sort
    /// key is derived from the name: without a space the whole name is the
    /// key, otherwise the key is everything after the first run of spaces
    /// and the name is re-normalized to `"first-part KEY"`.
    ///
    /// A record with no author gains a single credit; a single credit is
    /// promoted to a multi-author credit preserving order; a multi-author
    /// credit appends.
    pub fn add_author(&mut self, name: &str, sort_key: &str) {
        let mut name = name.trim().to_string();
        if name.is_empty() {
            return;
        }
        let mut key = sort_key.trim().to_string();
        if key.is_empty() {
            match name.split_once(' ') {
                None => key = name.clone(),
                Some((first, rest)) => {
                    key = rest.trim_start().to_string();
                    name = format!("{first} {key}");
                },
            }
        }
        let author = SingleAuthor::new(name, key);
        self.author = Some(match self.author.take() {
            None => Author::Single(author),
            Some(Author::Single(existing)) => Author::Multi(vec![existing, author]),
            Some(Author::Multi(mut authors)) => {
                authors.push(author);
                Author::Multi(authors)
            },
        });
    }
}
