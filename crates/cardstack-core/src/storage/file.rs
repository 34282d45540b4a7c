//! Directory-backed storage: one JSON record per card plus bare-named
//! image blob files.

use super::record::{self, CARD_EXTENSION};
use super::{CardStorage, StorageError, StorageResult};
use crate::card::{Card, CardId};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File storage rooted at a user-data directory.
///
/// Card records are `<uuid>.card` files; image blobs are stored next to
/// them under their bare identifier.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a file storage with the given base directory, creating the
    /// directory if needed.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("failed to create storage directory: {e}"))
            })?;
        }
        Ok(Self { base_path })
    }

    /// File storage in the default per-user location.
    ///
    /// On Unix: `~/.local/share/cardstack/cards/`
    /// On Windows: `%LOCALAPPDATA%\cardstack\cards\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("could not determine data directory".to_string()))?;
        Self::new(base.join("cardstack").join("cards"))
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    fn card_path(&self, id: CardId) -> PathBuf {
        self.base_path.join(format!("{id}.{CARD_EXTENSION}"))
    }

    fn blob_path(&self, name: &str) -> PathBuf {
        // Sanitize identifiers to be safe as filenames.
        let safe_name: String = name
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(safe_name)
    }
}

impl CardStorage for FileStorage {
    fn save_card(&self, card: &Card) -> StorageResult<()> {
        let json = record::encode_card(card)?;
        let path = self.card_path(card.id());
        fs::write(&path, json)
            .map_err(|e| StorageError::Io(format!("failed to write {}: {e}", path.display())))
    }

    fn load_cards(&self) -> StorageResult<Vec<Card>> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.base_path).map_err(|e| {
            StorageError::Io(format!(
                "failed to read {}: {e}",
                self.base_path.display()
            ))
        })?;

        let mut cards = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            let is_record = path
                .extension()
                .map(|ext| ext == CARD_EXTENSION)
                .unwrap_or(false);
            if !is_record {
                continue;
            }
            let loaded = fs::read_to_string(&path)
                .map_err(|e| StorageError::Io(e.to_string()))
                .and_then(|json| record::decode_card(&json, self));
            match loaded {
                Ok(card) => cards.push(card),
                Err(err) => {
                    log::error!("skipping unreadable card record {}: {err}", path.display());
                }
            }
        }
        Ok(cards)
    }

    fn delete_card(&self, id: CardId) -> StorageResult<()> {
        let path = self.card_path(id);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                StorageError::Io(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    fn save_image(&self, bytes: &[u8]) -> StorageResult<String> {
        let name = Uuid::new_v4().to_string();
        let path = self.blob_path(&name);
        fs::write(&path, bytes)
            .map_err(|e| StorageError::Io(format!("failed to write {}: {e}", path.display())))?;
        Ok(name)
    }

    fn load_image(&self, name: &str) -> StorageResult<Vec<u8>> {
        let path = self.blob_path(name);
        if !path.exists() {
            return Err(StorageError::NotFound(name.to_string()));
        }
        fs::read(&path)
            .map_err(|e| StorageError::Io(format!("failed to read {}: {e}", path.display())))
    }

    fn delete_image(&self, name: &str) -> StorageResult<()> {
        let path = self.blob_path(name);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                StorageError::Io(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::element::TextElement;
    use kurbo::Vec2;
    use tempfile::tempdir;

    fn storage() -> (tempfile::TempDir, FileStorage) {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        (dir, storage)
    }

    #[test]
    fn test_empty_directory_loads_nothing() {
        let (_dir, storage) = storage();
        assert!(storage.load_cards().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_card() {
        let (_dir, storage) = storage();
        let mut card = Card::new(color::random_background());
        card.add_image_element(&storage, vec![4, 5, 6], Vec2::new(1.0, 2.0));
        card.add_text_element(TextElement::new("greetings"));
        card.save(&storage);

        let loaded = storage.load_cards().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id(), card.id());
        assert_eq!(loaded[0].elements().len(), 2);
        let image = loaded[0].elements()[0].as_image().unwrap();
        assert_eq!(image.image(), &[4, 5, 6]);
    }

    #[test]
    fn test_corrupt_record_is_skipped() {
        let (dir, storage) = storage();
        let card = Card::new(color::random_background());
        card.save(&storage);
        fs::write(dir.path().join("broken.card"), "{ not json").unwrap();

        let loaded = storage.load_cards().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id(), card.id());
    }

    #[test]
    fn test_non_record_files_are_ignored() {
        let (dir, storage) = storage();
        // A blob file sitting next to records must not be parsed.
        fs::write(dir.path().join("some-blob"), [1u8, 2, 3]).unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        assert!(storage.load_cards().unwrap().is_empty());
    }

    #[test]
    fn test_delete_card_is_idempotent() {
        let (_dir, storage) = storage();
        let card = Card::new(color::random_background());
        card.save(&storage);
        storage.delete_card(card.id()).unwrap();
        assert!(storage.load_cards().unwrap().is_empty());
        // Second delete of the same record is fine.
        storage.delete_card(card.id()).unwrap();
    }

    #[test]
    fn test_blob_round_trip() {
        let (_dir, storage) = storage();
        let name = storage.save_image(&[7, 8, 9]).unwrap();
        assert_eq!(storage.load_image(&name).unwrap(), vec![7, 8, 9]);
        storage.delete_image(&name).unwrap();
        assert!(matches!(
            storage.load_image(&name),
            Err(StorageError::NotFound(_))
        ));
        // Deleting a missing blob is not an error.
        storage.delete_image(&name).unwrap();
    }

    #[test]
    fn test_blob_name_is_sanitized() {
        let (dir, storage) = storage();
        let path = storage.blob_path("../escape/attempt");
        assert!(path.starts_with(dir.path()));
        assert!(!path.to_string_lossy().contains(".."));
    }
}
