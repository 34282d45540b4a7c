//! Card aggregate: a background color plus elements in paint order.

use crate::element::{CardElement, ElementId, ImageElement, TextElement};
use crate::storage::CardStorage;
use crate::transfer::TransferItem;
use crate::transform::Transform;
use kurbo::Vec2;
use peniko::Color;
use uuid::Uuid;

/// Unique identifier for cards.
pub type CardId = Uuid;

/// A single card document.
///
/// Elements are kept in paint order: later elements draw on top. Every
/// mutating operation re-serializes the whole card through the given
/// storage, so the durable record never lags more than one failed save
/// behind the in-memory state.
#[derive(Debug, Clone)]
pub struct Card {
    id: CardId,
    pub background_color: Color,
    elements: Vec<CardElement>,
}

impl Card {
    /// Create an empty card with the given background.
    pub fn new(background_color: Color) -> Self {
        Self {
            id: Uuid::new_v4(),
            background_color,
            elements: Vec::new(),
        }
    }

    /// Rebuild a card from its persisted record.
    pub(crate) fn restored(
        id: CardId,
        background_color: Color,
        elements: Vec<CardElement>,
    ) -> Self {
        Self {
            id,
            background_color,
            elements,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    /// All elements in paint order.
    pub fn elements(&self) -> &[CardElement] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&CardElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut CardElement> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Store the image bytes as a blob, append an image element centered
    /// at `offset`, and save the card.
    ///
    /// The new element always lands on top with the default element size.
    /// If the blob cannot be stored, the element is still added with the
    /// bytes cached in memory and no filename; the failure is logged.
    pub fn add_image_element(
        &mut self,
        storage: &dyn CardStorage,
        bytes: Vec<u8>,
        offset: Vec2,
    ) -> ElementId {
        let image_filename = match storage.save_image(&bytes) {
            Ok(name) => Some(name),
            Err(err) => {
                log::error!("failed to store image blob for card {}: {err}", self.id);
                None
            }
        };
        let element = ImageElement::new(Transform::with_offset(offset), Some(bytes), image_filename);
        let id = element.id();
        self.elements.push(CardElement::Image(element));
        self.save(storage);
        id
    }

    /// Append a text element on top. Does not save; batch callers (and
    /// the text editor) save once when they are done.
    pub fn add_text_element(&mut self, text: TextElement) -> ElementId {
        let id = text.id();
        self.elements.push(CardElement::Text(text));
        id
    }

    /// Add every transfer item, all anchored at the same offset, then
    /// save once.
    pub fn add_elements_from_transfer(
        &mut self,
        storage: &dyn CardStorage,
        items: Vec<TransferItem>,
        offset: Vec2,
    ) {
        for item in items {
            match item {
                TransferItem::Text(text) => {
                    let mut element = TextElement::new(text);
                    element.transform = Transform::with_offset(offset);
                    self.add_text_element(element);
                }
                TransferItem::Image(bytes) => {
                    self.add_image_element(storage, bytes, offset);
                }
            }
        }
        // Text additions above are not saved individually.
        self.save(storage);
    }

    /// Remove an element by id, deleting its backing image blob first,
    /// then save. A missing id is a logged no-op.
    pub fn remove_element(&mut self, storage: &dyn CardStorage, id: ElementId) {
        let Some(index) = self.elements.iter().position(|e| e.id() == id) else {
            log::warn!("remove_element: card {} has no element {id}", self.id);
            return;
        };
        if let Some(image) = self.elements[index].as_image() {
            if let Some(name) = &image.image_filename {
                if let Err(err) = storage.delete_image(name) {
                    log::error!("failed to delete image blob {name}: {err}");
                }
            }
        }
        self.elements.remove(index);
        self.save(storage);
    }

    /// Set the frame index of an image element. A text element or a
    /// missing id is a no-op.
    pub fn update_frame_index(&mut self, id: ElementId, frame_index: usize) {
        if let Some(image) = self.element_mut(id).and_then(CardElement::as_image_mut) {
            image.frame_index = Some(frame_index);
        }
    }

    /// Serialize this card to its durable record, replacing any prior
    /// record for this id. Failure is logged, not fatal; the in-memory
    /// card stays authoritative until the next successful save.
    pub fn save(&self, storage: &dyn CardStorage) {
        if let Err(err) = storage.save_card(self) {
            log::error!("failed to save card {}: {err}", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::storage::MemoryStorage;

    fn card() -> Card {
        Card::new(color::random_background())
    }

    #[test]
    fn test_add_image_element_is_on_top_and_visible() {
        let storage = MemoryStorage::new();
        let mut card = card();
        card.add_text_element(TextElement::new("under"));
        let id = card.add_image_element(&storage, vec![1, 2, 3], Vec2::new(10.0, 20.0));

        let last = card.elements().last().unwrap();
        assert_eq!(last.id(), id);
        assert!(last.is_image());
        assert!(last.transform().size.width > 0.0);
        assert_eq!(last.transform().offset, Vec2::new(10.0, 20.0));
        // Blob stored and record saved.
        assert_eq!(storage.image_count(), 1);
        assert_eq!(storage.card_count(), 1);
    }

    #[test]
    fn test_add_text_element_does_not_save() {
        let storage = MemoryStorage::new();
        let mut card = card();
        card.add_text_element(TextElement::new("hello"));
        assert_eq!(storage.card_count(), 0);
        card.save(&storage);
        assert_eq!(storage.card_count(), 1);
    }

    #[test]
    fn test_element_ids_unique() {
        let storage = MemoryStorage::new();
        let mut card = card();
        let mut ids = Vec::new();
        for i in 0..8u8 {
            ids.push(card.add_image_element(&storage, vec![i], Vec2::ZERO));
            ids.push(card.add_text_element(TextElement::new("t")));
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_remove_element_deletes_blob() {
        let storage = MemoryStorage::new();
        let mut card = card();
        let id = card.add_image_element(&storage, vec![9, 9], Vec2::ZERO);
        assert_eq!(storage.image_count(), 1);

        card.remove_element(&storage, id);
        assert!(card.elements().is_empty());
        assert_eq!(storage.image_count(), 0);
    }

    #[test]
    fn test_remove_missing_element_is_noop() {
        let storage = MemoryStorage::new();
        let mut card = card();
        card.add_text_element(TextElement::new("keep"));
        card.remove_element(&storage, Uuid::new_v4());
        assert_eq!(card.elements().len(), 1);
    }

    #[test]
    fn test_update_frame_index() {
        let storage = MemoryStorage::new();
        let mut card = card();
        let image_id = card.add_image_element(&storage, vec![1], Vec2::ZERO);
        let text_id = card.add_text_element(TextElement::new("t"));

        card.update_frame_index(image_id, 3);
        assert_eq!(
            card.element(image_id).and_then(CardElement::as_image).unwrap().frame_index,
            Some(3)
        );
        // No-op on text elements and unknown ids.
        card.update_frame_index(text_id, 1);
        assert!(card.element(text_id).unwrap().as_text().is_some());
        card.update_frame_index(Uuid::new_v4(), 1);
    }

    #[test]
    fn test_transfer_batch() {
        let storage = MemoryStorage::new();
        let mut card = card();
        let offset = Vec2::new(-40.0, 60.0);
        card.add_elements_from_transfer(
            &storage,
            vec![
                TransferItem::Text("a".to_string()),
                TransferItem::Image(vec![1]),
                TransferItem::Text("b".to_string()),
            ],
            offset,
        );
        assert_eq!(card.elements().len(), 3);
        for element in card.elements() {
            assert_eq!(element.transform().offset, offset);
        }
        // The batch persisted, including the trailing text element.
        assert_eq!(storage.card_count(), 1);
    }
}
