use std::path::Path;

pub mod message_repo;
pub mod records;

const MESSAGES_TREE: &str = "messages";

/// Opens the embedded database rooted at the given directory.
///
/// # Errors
/// Returns `sled::Error` if the database cannot be opened.
pub fn open_database(path: &Path) -> Result<sled::Db, sled::Error> {
    sled::open(path)
}

/// Opens the tree holding the id -> message table.
///
/// # Errors
/// Returns `sled::Error` if the tree cannot be opened.
pub fn open_messages_tree(db: &sled::Db) -> Result<sled::Tree, sled::Error> {
    db.open_tree(MESSAGES_TREE)
}
