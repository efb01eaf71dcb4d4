//! The center (discard) pile.
//!
//! Append-only: played cards go on top, nothing is taken off. The last card
//! is the one drawn on top.

use im::Vector;

use super::store::{CardList, ListenerId, ZoneChange};
use crate::cards::CardModel;
use crate::core::entity::CardId;
use crate::error::Result;

/// Play history, bottom first.
#[derive(Debug, Default)]
pub struct CenterPileStore {
    cards: CardList,
}

impl CenterPileStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pile from cards, bottom first.
    pub fn from_cards(cards: impl IntoIterator<Item = CardModel>) -> Result<Self> {
        let mut pile = Self::new();
        for card in cards {
            pile.append(card)?;
        }
        Ok(pile)
    }

    /// Put a card on top of the pile.
    ///
    /// Fails if a card with the same id is already on the pile.
    pub fn append(&mut self, card: CardModel) -> Result<()> {
        self.cards.push(card).map(|_| ())
    }

    /// The most recently played card.
    #[must_use]
    pub fn top(&self) -> Option<&CardModel> {
        self.cards.cards().last()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains(id)
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardModel> {
        self.cards.get(id)
    }

    /// Iterate cards bottom to top.
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
    use crate::core::geometry::Vector as Offset;

    #[test]
    fn test_append_sets_top() {
        let mut pile = CenterPileStore::new();
        assert!(pile.top().is_none());

        pile.append(CardModel::new(CardId(0), 2, CardColor::Red)).unwrap();
        pile.append(CardModel::new(CardId(1), 9, CardColor::Yellow)).unwrap();

        assert_eq!(pile.top().map(|c| c.id()), Some(CardId(1)));
        assert_eq!(pile.len(), 2);
    }

    #[test]
    fn test_append_keeps_offset() {
        let mut pile = CenterPileStore::new();
        let card = CardModel::new(CardId(0), 2, CardColor::Red).with_offset(Offset::new(-3.0, 12.0));
        pile.append(card).unwrap();

        assert_eq!(pile.get(CardId(0)).unwrap().offset(), Offset::new(-3.0, 12.0));
    }

    #[test]
    fn test_duplicate_append_rejected() {
        let card = CardModel::new(CardId(0), 2, CardColor::Red);
        let mut pile = CenterPileStore::from_cards([card]).unwrap();
        assert!(pile.append(card).is_err());
        assert_eq!(pile.len(), 1);
    }
}
