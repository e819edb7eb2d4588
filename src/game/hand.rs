use super::card::{Card, Suit};
use serde::{Deserialize, Serialize};

/// An ordered hand of cards, no duplicates. The order carries no game
/// meaning but is preserved so play enumeration stays deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check if the hand holds a specific card
    pub fn has_card(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Check if the hand holds any card of the given suit
    pub fn holds_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|card| card.suit == suit)
    }

    /// Remove one occurrence of a card from the hand
    pub fn remove_card(&mut self, card: &Card) -> bool {
        if let Some(pos) = self.cards.iter().position(|c| c == card) {
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    /// The hand after removing the card at `index`, order preserved
    pub fn without_index(&self, index: usize) -> Hand {
        let mut cards = self.cards.clone();
        cards.remove(index);
        Hand::new(cards)
    }

    /// Get hand as card codes for transmission
    pub fn to_codes(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.code()).collect()
    }

    /// Create hand from card codes
    pub fn from_codes(codes: &[String]) -> Result<Self, String> {
        let mut cards = Vec::with_capacity(codes.len());
        for code in codes {
            cards.push(Card::from_code(code)?);
        }
        Ok(Self::new(cards))
    }
}
