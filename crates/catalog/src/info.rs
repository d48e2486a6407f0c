//! Durable mirror of a book record's fields.
//!
//! `BookInfo` wraps the per-file options that persist extracted metadata
//! between runs, so re-opening a book does not re-run its format plugin.
//! The option category, option names and default sentinels are kept
//! byte-for-byte compatible with snapshots written by earlier reader
//! versions.

use folio_filesystem::BookPath;
use folio_formats::consts::UNKNOWN_LANGUAGE;
use folio_formats::models::{Author, BookRecord, SingleAuthor};
use folio_options::{BoolOption, IntRangeOption, StoreHandle, StringOption};

/// Option category holding all per-book metadata.
const BOOKS_CATEGORY: &str = "Books";

/// Structured format whose persisted records predate the sequence options;
/// those are assumed sequence-defined instead of forcing a re-extraction.
const SEQUENCE_DEFINED_EXTENSION: &str = "fb2";

pub(crate) struct BookInfo {
    author_display_name: StringOption,
    author_sort_key: StringOption,
    title: StringOption,
    sequence_name: StringOption,
    number_in_sequence: IntRangeOption,
    language: StringOption,
    encoding: StringOption,
    // Papers over a historical gap: old snapshots lack the sequence
    // options entirely, so a separate flag records that the sequence
    // state is definitive even when empty.
    sequence_defined: BoolOption,
}

impl BookInfo {
    pub(crate) fn new(store: &StoreHandle, path: &BookPath) -> Self {
        let scope = path.as_str();
        Self {
            author_display_name: StringOption::new(store, BOOKS_CATEGORY, scope, "AuthorDisplayName", ""),
            author_sort_key: StringOption::new(store, BOOKS_CATEGORY, scope, "AuthorSortKey", ""),
            title: StringOption::new(store, BOOKS_CATEGORY, scope, "Title", ""),
            sequence_name: StringOption::new(store, BOOKS_CATEGORY, scope, "Sequence", ""),
            number_in_sequence: IntRangeOption::new(store, BOOKS_CATEGORY, scope, "Number in seq", 0, 0, 100),
            language: StringOption::new(store, BOOKS_CATEGORY, scope, "Language", UNKNOWN_LANGUAGE),
            encoding: StringOption::new(store, BOOKS_CATEGORY, scope, "Encoding", ""),
            sequence_defined: BoolOption::new(
                store,
                BOOKS_CATEGORY,
                scope,
                "SequenceDefined",
                path.extension() == SEQUENCE_DEFINED_EXTENSION,
            ),
        }
    }

    /// A persisted record is complete when every field extraction is
    /// expected to produce is present and the sequence state is known to
    /// be definitive. Complete records short-circuit extraction.
    pub(crate) fn is_complete(&self) -> bool {
        !self.author_display_name.value().is_empty()
            && !self.author_sort_key.value().is_empty()
            && !self.title.value().is_empty()
            && !self.encoding.value().is_empty()
            && self.sequence_defined.value()
    }

    /// Copy persisted fields into the in-memory record. A persisted author
    /// is always a single credit; multi-author detail does not survive the
    /// option format.
    pub(crate) fn load_into(&self, record: &mut BookRecord) {
        let display_name = self.author_display_name.value();
        match display_name.is_empty() {
            true => record.clear_author(),
            false => record.set_author(Author::Single(SingleAuthor::new(
                display_name,
                self.author_sort_key.value(),
            ))),
        }
        record.set_title(self.title.value());
        record.set_sequence_name(self.sequence_name.value());
        record.set_number_in_sequence(u32::try_from(self.number_in_sequence.value()).unwrap_or(0));
        record.set_language(self.language.value());
        record.set_encoding(self.encoding.value());
    }

    /// Mirror the in-memory record into the persisted options.
    pub(crate) fn save_from(&self, record: &BookRecord) {
        let (display_name, sort_key) = match record.author() {
            Some(author) => (author.display_name(), author.sort_key().to_string()),
            None => (String::new(), String::new()),
        };
        self.author_display_name.set(display_name);
        self.author_sort_key.set(sort_key);
        self.title.set(record.title());
        self.sequence_name.set(record.sequence_name());
        self.number_in_sequence.set(i32::try_from(record.number_in_sequence()).unwrap_or(i32::MAX));
        self.language.set(record.language());
        self.encoding.set(record.encoding());
    }

    pub(crate) fn mark_sequence_defined(&self) {
        self.sequence_defined.set(true);
    }

    /// Reset every field back to its default, invalidating the record.
    pub(crate) fn reset(&self) {
        self.author_display_name.set("");
        self.author_sort_key.set("");
        self.title.set("");
        self.sequence_name.set("");
        self.number_in_sequence.set(0);
        self.language.set(UNKNOWN_LANGUAGE);
        self.encoding.set("");
    }

    #[cfg(test)]
    pub(crate) fn title_value(&self) -> String {
        self.title.value()
    }
}
