//! Ordered card storage with change notification.
//!
//! `CardList` is the shared backing for the hand and the center pile. It
//! keeps cards in display order, rejects duplicate ids and publishes every
//! successful mutation to registered listeners, in registration order.
//!
//! Contents live in an `im::Vector`, so snapshots handed to a renderer are
//! O(1) clones that never observe later mutations.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardModel;
use crate::core::entity::CardId;
use crate::error::{Result, TableError};

/// Handle returned by `on_change`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

/// A single mutation of a store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ZoneChange {
    /// `card` was inserted at `index`.
    Added { card: CardModel, index: usize },
    /// `card` was removed from `index`.
    Removed { card: CardModel, index: usize },
}

impl ZoneChange {
    /// The card affected by this change.
    #[must_use]
    pub fn card(&self) -> &CardModel {
        match self {
            Self::Added { card, .. } | Self::Removed { card, .. } => card,
        }
    }
}

type Listener = Box<dyn FnMut(&ZoneChange)>;

/// Ordered, duplicate-free list of cards with listeners.
#[derive(Default)]
pub(crate) struct CardList {
    cards: Vector<CardModel>,
    ids: FxHashSet<CardId>,
    listeners: SmallVec<[(ListenerId, Listener); 2]>,
    next_listener: u32,
}

impl CardList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a card at the end (top).
    pub(crate) fn push(&mut self, card: CardModel) -> Result<usize> {
        if !self.ids.insert(card.id()) {
            return Err(TableError::DuplicateCard(card.id()));
        }
        let index = self.cards.len();
        self.cards.push_back(card);
        self.notify(&ZoneChange::Added { card, index });
        Ok(index)
    }

    /// Remove a card by id, returning it.
    pub(crate) fn remove(&mut self, id: CardId) -> Option<CardModel> {
        if !self.ids.remove(&id) {
            return None;
        }
        // Present in `ids` implies present in `cards`.
        let index = self.position(id)?;
        let card = self.cards.remove(index);
        self.notify(&ZoneChange::Removed { card, index });
        Some(card)
    }

    pub(crate) fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    pub(crate) fn get(&self, id: CardId) -> Option<&CardModel> {
        self.position(id).and_then(|i| self.cards.get(i))
    }

    pub(crate) fn contains(&self, id: CardId) -> bool {
        self.ids.contains(&id)
    }

    pub(crate) fn cards(&self) -> &Vector<CardModel> {
        &self.cards
    }

    pub(crate) fn len(&self) -> usize {
        self.cards.len()
    }

    pub(crate) fn on_change(&mut self, listener: impl FnMut(&ZoneChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, change: &ZoneChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(change);
        }
    }
}

impl std::fmt::Debug for CardList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardList")
            .field("cards", &self.cards)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardColor;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn card(id: u32) -> CardModel {
        CardModel::new(CardId(id), 2, CardColor::Blue)
    }

    #[test]
    fn test_push_and_remove_keep_order() {
        let mut list = CardList::new();
        list.push(card(1)).unwrap();
        list.push(card(2)).unwrap();
        list.push(card(3)).unwrap();

        assert_eq!(list.remove(CardId(2)), Some(card(2)));
        let ids: Vec<_> = list.cards().iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![CardId(1), CardId(3)]);
        assert!(!list.contains(CardId(2)));
        assert_eq!(list.remove(CardId(2)), None);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut list = CardList::new();
        list.push(card(1)).unwrap();

        let err = list.push(card(1)).unwrap_err();
        assert!(matches!(err, TableError::DuplicateCard(CardId(1))));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_listeners_see_changes_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut list = CardList::new();

        let sink = Rc::clone(&log);
        list.on_change(move |change| sink.borrow_mut().push(change.clone()));

        list.push(card(1)).unwrap();
        list.push(card(2)).unwrap();
        list.remove(CardId(1));

        assert_eq!(
            *log.borrow(),
            vec![
                ZoneChange::Added { card: card(1), index: 0 },
                ZoneChange::Added { card: card(2), index: 1 },
                ZoneChange::Removed { card: card(1), index: 0 },
            ]
        );
    }

    #[test]
    fn test_failed_mutation_is_silent() {
        let count = Rc::new(RefCell::new(0));
        let mut list = CardList::new();
        list.push(card(1)).unwrap();

        let sink = Rc::clone(&count);
        list.on_change(move |_| *sink.borrow_mut() += 1);

        let _ = list.push(card(1));
        list.remove(CardId(9));
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_remove_listener() {
        let count = Rc::new(RefCell::new(0));
        let mut list = CardList::new();

        let sink = Rc::clone(&count);
        let id = list.on_change(move |_| *sink.borrow_mut() += 1);
        assert_eq!(list.listener_count(), 1);

        list.push(card(1)).unwrap();
        assert!(list.remove_listener(id));
        assert!(!list.remove_listener(id));
        list.push(card(2)).unwrap();

        assert_eq!(*count.borrow(), 1);
        assert_eq!(list.listener_count(), 0);
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let mut list = CardList::new();
        list.push(card(1)).unwrap();

        let snapshot = list.cards().clone();
        list.push(card(2)).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(list.len(), 2);
    }
}
