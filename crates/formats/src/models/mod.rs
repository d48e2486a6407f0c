mod author;
mod record;

pub use self::author::{Author, SingleAuthor};
pub use self::record::{BookRecord, MAX_NUMBER_IN_SEQUENCE};
