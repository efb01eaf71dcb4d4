//! The local player's hand.
//!
//! Cards are dealt in at setup and leave only when played. Order is display
//! order and carries no game meaning.
//!
//! ```
//! use uno_table::cards::{CardColor, CardModel};
//! use uno_table::core::CardId;
//! use uno_table::zones::HandStore;
//!
//! let mut hand = HandStore::new();
//! hand.deal(CardModel::new(CardId(0), 7, CardColor::Red)).unwrap();
//! hand.deal(CardModel::new(CardId(1), 3, CardColor::Blue)).unwrap();
//!
//! let played = hand.remove(CardId(0)).unwrap();
//! assert_eq!(played.number(), 7);
//! assert_eq!(hand.len(), 1);
//! ```

use im::Vector;

use super::store::{CardList, ListenerId, ZoneChange};
use crate::cards::CardModel;
use crate::core::entity::CardId;
use crate::error::Result;

/// Ordered, duplicate-free collection of the player's cards.
#[derive(Debug, Default)]
pub struct HandStore {
    cards: CardList,
}

impl HandStore {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from cards in display order.
    pub fn from_cards(cards: impl IntoIterator<Item = CardModel>) -> Result<Self> {
        let mut hand = Self::new();
        for card in cards {
            hand.deal(card)?;
        }
        Ok(hand)
    }

    /// Add a card to the end of the hand.
    ///
    /// Fails if a card with the same id is already held.
    pub fn deal(&mut self, card: CardModel) -> Result<()> {
        self.cards.push(card).map(|_| ())
    }

    /// Remove a card by id, returning it if it was held.
    pub fn remove(&mut self, id: CardId) -> Option<CardModel> {
        self.cards.remove(id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains(id)
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardModel> {
        self.cards.get(id)
    }

    /// Display index of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.position(id)
    }

    /// Iterate cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CardModel> + '_ {
        self.cards.cards().iter()
    }

    /// Cheap read-only copy of the current contents.
    #[must_use]
    pub fn snapshot(&self) -> Vector<CardModel> {
        self.cards.cards().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to mutations.
    pub fn on_change(&mut self, listener: impl FnMut(&ZoneChange) + 'static) -> ListenerId {
        self.cards.on_change(listener)
    }

    /// Unsubscribe. Returns false if the listener was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.cards.remove_listener(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardColor;
    use crate::error::TableError;

    fn hand_of(ids: &[u32]) -> HandStore {
        HandStore::from_cards(ids.iter().map(|&i| CardModel::new(CardId(i), 2, CardColor::Green))).unwrap()
    }

    #[test]
    fn test_from_cards_preserves_order() {
        let hand = hand_of(&[5, 3, 9]);
        let ids: Vec<_> = hand.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![CardId(5), CardId(3), CardId(9)]);
        assert_eq!(hand.position(CardId(9)), Some(2));
    }

    #[test]
    fn test_from_cards_rejects_duplicates() {
        let cards = [
            CardModel::new(CardId(1), 2, CardColor::Red),
            CardModel::new(CardId(1), 4, CardColor::Blue),
        ];
        assert!(matches!(
            HandStore::from_cards(cards),
            Err(TableError::DuplicateCard(CardId(1)))
        ));
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut hand = hand_of(&[1, 2]);
        assert!(hand.remove(CardId(7)).is_none());
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn test_remove_then_contains() {
        let mut hand = hand_of(&[1, 2]);
        assert!(hand.contains(CardId(1)));
        hand.remove(CardId(1));
        assert!(!hand.contains(CardId(1)));
        assert!(hand.get(CardId(1)).is_none());
        assert!(!hand.is_empty());
    }
}
