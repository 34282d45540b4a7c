//! The card store: every card for the user, kept in sync with storage.

use crate::card::{Card, CardId};
use crate::color;
use crate::element::{CardElement, ElementId};
use crate::storage::CardStorage;
use std::sync::Arc;

/// Reference to the element currently selected in the editing session.
///
/// An identity, not a copy: the element itself is looked up in its
/// owning card on access, so a stale reference simply resolves to
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedElement {
    pub card_id: CardId,
    pub element_id: ElementId,
}

/// In-memory collection of all cards, backed by a [`CardStorage`].
///
/// All mutation happens on the single interactive thread; the store
/// keeps the in-memory sequence and the on-disk state synchronized.
pub struct CardStore {
    storage: Arc<dyn CardStorage>,
    cards: Vec<Card>,
    selected_element: Option<SelectedElement>,
}

impl CardStore {
    /// Open a store, loading every persisted card. Records the backend
    /// could not read were already skipped and logged; a failure to
    /// enumerate at all yields an empty store.
    pub fn open(storage: Arc<dyn CardStorage>) -> Self {
        let cards = match storage.load_cards() {
            Ok(cards) => cards,
            Err(err) => {
                log::error!("failed to load cards: {err}");
                Vec::new()
            }
        };
        Self {
            storage,
            cards,
            selected_element: None,
        }
    }

    /// The backing storage, for card-level operations.
    pub fn storage(&self) -> Arc<dyn CardStorage> {
        Arc::clone(&self.storage)
    }

    /// All cards, in load/creation order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }

    /// Create a new empty card with a palette background, persist it
    /// immediately, and return its id.
    pub fn add_card(&mut self) -> CardId {
        let card = Card::new(color::random_background());
        let id = card.id();
        card.save(self.storage.as_ref());
        self.cards.push(card);
        id
    }

    /// Remove a card: delete every element (cascading to image blobs),
    /// the legacy card-id blob, and the record file, then drop it from
    /// the sequence. A missing id is a no-op.
    pub fn remove(&mut self, id: CardId) {
        let Some(index) = self.cards.iter().position(|c| c.id() == id) else {
            return;
        };

        let element_ids: Vec<ElementId> =
            self.cards[index].elements().iter().map(|e| e.id()).collect();
        for element_id in element_ids {
            self.cards[index].remove_element(self.storage.as_ref(), element_id);
        }

        // Early versions could attach a blob directly under the card's
        // own id; clean that up too.
        if let Err(err) = self.storage.delete_image(&id.to_string()) {
            log::warn!("failed to delete card image {id}: {err}");
        }
        if let Err(err) = self.storage.delete_card(id) {
            log::error!("failed to delete card record {id}: {err}");
        }

        if self
            .selected_element
            .is_some_and(|selected| selected.card_id == id)
        {
            self.selected_element = None;
        }
        self.cards.remove(index);
    }

    /// Mark an element as selected. Ignored if the element does not
    /// exist in the store.
    pub fn select_element(&mut self, card_id: CardId, element_id: ElementId) {
        if self
            .card(card_id)
            .and_then(|card| card.element(element_id))
            .is_some()
        {
            self.selected_element = Some(SelectedElement {
                card_id,
                element_id,
            });
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_element = None;
    }

    /// The current selection reference, if any.
    pub fn selection(&self) -> Option<SelectedElement> {
        self.selected_element
    }

    /// Resolve the selected element, or `None` when nothing is selected
    /// or the reference has gone stale.
    pub fn selected_element(&self) -> Option<&CardElement> {
        let selected = self.selected_element?;
        self.card(selected.card_id)?.element(selected.element_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use kurbo::Vec2;
    use uuid::Uuid;

    fn open_store() -> (Arc<MemoryStorage>, CardStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = CardStore::open(Arc::clone(&storage) as Arc<dyn CardStorage>);
        (storage, store)
    }

    #[test]
    fn test_open_empty() {
        let (_storage, store) = open_store();
        assert!(store.cards().is_empty());
        assert!(store.selection().is_none());
    }

    #[test]
    fn test_add_card_persists() {
        let (storage, mut store) = open_store();
        let id = store.add_card();
        assert_eq!(store.cards().len(), 1);
        assert_eq!(store.cards()[0].id(), id);
        assert_eq!(storage.card_count(), 1);
    }

    #[test]
    fn test_card_ids_unique() {
        let (_storage, mut store) = open_store();
        let ids: Vec<CardId> = (0..5).map(|_| store.add_card()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_add_then_remove_leaves_nothing() {
        let (storage, mut store) = open_store();
        let id = store.add_card();
        store.remove(id);
        assert!(store.cards().is_empty());
        assert_eq!(storage.card_count(), 0);
    }

    #[test]
    fn test_remove_cascades_to_blobs() {
        let (storage, mut store) = open_store();
        let id = store.add_card();
        {
            let shared = store.storage();
            let card = store.card_mut(id).unwrap();
            for i in 0..3u8 {
                card.add_image_element(shared.as_ref(), vec![i], Vec2::ZERO);
            }
        }
        assert_eq!(storage.image_count(), 3);

        store.remove(id);
        assert!(store.cards().is_empty());
        assert_eq!(storage.image_count(), 0);
        assert_eq!(storage.card_count(), 0);
    }

    #[test]
    fn test_remove_unknown_card_is_noop() {
        let (_storage, mut store) = open_store();
        store.add_card();
        store.remove(Uuid::new_v4());
        assert_eq!(store.cards().len(), 1);
    }

    #[test]
    fn test_reload_round_trip() {
        let (storage, mut store) = open_store();
        let id = store.add_card();
        {
            let shared = store.storage();
            let card = store.card_mut(id).unwrap();
            card.add_image_element(shared.as_ref(), vec![1, 2], Vec2::new(5.0, 5.0));
        }

        let reloaded = CardStore::open(storage as Arc<dyn CardStorage>);
        assert_eq!(reloaded.cards().len(), 1);
        assert_eq!(reloaded.cards()[0].id(), id);
        assert_eq!(reloaded.cards()[0].elements().len(), 1);
    }

    #[test]
    fn test_selection_lookup() {
        let (_storage, mut store) = open_store();
        let card_id = store.add_card();
        let shared = store.storage();
        let element_id = store
            .card_mut(card_id)
            .unwrap()
            .add_image_element(shared.as_ref(), vec![1], Vec2::ZERO);

        store.select_element(card_id, element_id);
        assert!(store.selected_element().is_some());

        // Selecting something that does not exist is ignored.
        store.select_element(card_id, Uuid::new_v4());
        assert_eq!(
            store.selection(),
            Some(SelectedElement {
                card_id,
                element_id
            })
        );
    }

    #[test]
    fn test_selection_cleared_when_card_removed() {
        let (_storage, mut store) = open_store();
        let card_id = store.add_card();
        let shared = store.storage();
        let element_id = store
            .card_mut(card_id)
            .unwrap()
            .add_image_element(shared.as_ref(), vec![1], Vec2::ZERO);
        store.select_element(card_id, element_id);

        store.remove(card_id);
        assert!(store.selection().is_none());
        assert!(store.selected_element().is_none());
    }

    #[test]
    fn test_stale_selection_resolves_to_none() {
        let (_storage, mut store) = open_store();
        let card_id = store.add_card();
        let shared = store.storage();
        let element_id = store
            .card_mut(card_id)
            .unwrap()
            .add_image_element(shared.as_ref(), vec![1], Vec2::ZERO);
        store.select_element(card_id, element_id);

        store
            .card_mut(card_id)
            .unwrap()
            .remove_element(shared.as_ref(), element_id);
        // The reference is stale but harmless.
        assert!(store.selection().is_some());
        assert!(store.selected_element().is_none());
    }
}
