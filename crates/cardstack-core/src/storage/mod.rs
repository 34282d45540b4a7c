//! Storage abstraction for card records and their image blobs.

mod file;
mod memory;
mod record;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use record::{CARD_EXTENSION, decode_card, encode_card};

use crate::card::{Card, CardId};
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Backend holding card records plus the image blob side-channel.
///
/// Blob identifiers are opaque strings, stable once issued. Deleting a
/// missing blob or record is not an error.
pub trait CardStorage: Send + Sync {
    /// Persist a card record, replacing any previous record for its id.
    fn save_card(&self, card: &Card) -> StorageResult<()>;

    /// Load every readable card record. A corrupt or unreadable record is
    /// skipped with a logged error, never aborting the whole load.
    fn load_cards(&self) -> StorageResult<Vec<Card>>;

    /// Delete a card record.
    fn delete_card(&self, id: CardId) -> StorageResult<()>;

    /// Store image bytes under a fresh identifier.
    fn save_image(&self, bytes: &[u8]) -> StorageResult<String>;

    /// Load image bytes by identifier.
    fn load_image(&self, name: &str) -> StorageResult<Vec<u8>>;

    /// Delete an image blob.
    fn delete_image(&self, name: &str) -> StorageResult<()>;
}
