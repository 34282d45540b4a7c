//! In-memory storage for tests and ephemeral use.

use super::record;
use super::{CardStorage, StorageError, StorageResult};
use crate::card::{Card, CardId};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory storage backend.
///
/// Records are held in their encoded form so the codec is exercised the
/// same way the file backend exercises it.
#[derive(Default)]
pub struct MemoryStorage {
    cards: RwLock<HashMap<CardId, String>>,
    images: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored card records.
    pub fn card_count(&self) -> usize {
        self.cards.read().map(|cards| cards.len()).unwrap_or(0)
    }

    /// Number of stored image blobs.
    pub fn image_count(&self) -> usize {
        self.images.read().map(|images| images.len()).unwrap_or(0)
    }

    /// Whether a blob with this identifier exists.
    pub fn contains_image(&self, name: &str) -> bool {
        self.images
            .read()
            .map(|images| images.contains_key(name))
            .unwrap_or(false)
    }
}

impl CardStorage for MemoryStorage {
    fn save_card(&self, card: &Card) -> StorageResult<()> {
        let json = record::encode_card(card)?;
        let mut cards = self
            .cards
            .write()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        cards.insert(card.id(), json);
        Ok(())
    }

    fn load_cards(&self) -> StorageResult<Vec<Card>> {
        let records: Vec<(CardId, String)> = {
            let cards = self
                .cards
                .read()
                .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
            cards.iter().map(|(id, json)| (*id, json.clone())).collect()
        };

        let mut loaded = Vec::new();
        for (id, json) in records {
            match record::decode_card(&json, self) {
                Ok(card) => loaded.push(card),
                Err(err) => log::error!("skipping unreadable card record {id}: {err}"),
            }
        }
        Ok(loaded)
    }

    fn delete_card(&self, id: CardId) -> StorageResult<()> {
        let mut cards = self
            .cards
            .write()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        cards.remove(&id);
        Ok(())
    }

    fn save_image(&self, bytes: &[u8]) -> StorageResult<String> {
        let name = Uuid::new_v4().to_string();
        let mut images = self
            .images
            .write()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        images.insert(name.clone(), bytes.to_vec());
        Ok(name)
    }

    fn load_image(&self, name: &str) -> StorageResult<Vec<u8>> {
        let images = self
            .images
            .read()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        images
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    fn delete_image(&self, name: &str) -> StorageResult<()> {
        let mut images = self
            .images
            .write()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        images.remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn test_save_and_load() {
        let storage = MemoryStorage::new();
        let card = Card::new(color::random_background());
        storage.save_card(&card).unwrap();

        let loaded = storage.load_cards().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id(), card.id());
    }

    #[test]
    fn test_delete_card() {
        let storage = MemoryStorage::new();
        let card = Card::new(color::random_background());
        storage.save_card(&card).unwrap();
        storage.delete_card(card.id()).unwrap();
        assert_eq!(storage.card_count(), 0);
        // Idempotent.
        storage.delete_card(card.id()).unwrap();
    }

    #[test]
    fn test_image_not_found() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            storage.load_image("missing"),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_image_round_trip() {
        let storage = MemoryStorage::new();
        let name = storage.save_image(&[1, 2, 3]).unwrap();
        assert!(storage.contains_image(&name));
        assert_eq!(storage.load_image(&name).unwrap(), vec![1, 2, 3]);
        storage.delete_image(&name).unwrap();
        assert!(!storage.contains_image(&name));
        storage.delete_image(&name).unwrap();
    }
}
