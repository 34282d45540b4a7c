//! Cardstack core library.
//!
//! Platform-agnostic document model and persistence for the Cardstack
//! card maker: cards and their elements, the JSON record codec, the
//! blob store for image bytes, and the geometry helpers that map the
//! fixed card coordinate space onto whatever surface renders it.

pub mod card;
pub mod color;
pub mod element;
pub mod fonts;
pub mod frames;
pub mod settings;
pub mod storage;
pub mod store;
pub mod transfer;
pub mod transform;

pub use card::{Card, CardId};
pub use element::{CardElement, ElementId, ImageElement, TextElement};
pub use frames::Frame;
pub use storage::{CardStorage, FileStorage, MemoryStorage, StorageError, StorageResult};
pub use store::{CardStore, SelectedElement};
pub use transfer::TransferItem;
pub use transform::Transform;
