use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Card suits in The Crew. Rocket is the permanent trump suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Suit {
    #[serde(rename = "B")]
    Blue,
    #[serde(rename = "Y")]
    Yellow,
    #[serde(rename = "M")]
    Magenta,
    #[serde(rename = "G")]
    Green,
    #[serde(rename = "R")]
    Rocket,
}

impl Suit {
    /// Single-letter code used on the wire ("B", "Y", "M", "G", "R")
    pub fn letter(&self) -> char {
        match self {
            Suit::Blue => 'B',
            Suit::Yellow => 'Y',
            Suit::Magenta => 'M',
            Suit::Green => 'G',
            Suit::Rocket => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Option<Suit> {
        match letter {
            'B' => Some(Suit::Blue),
            'Y' => Some(Suit::Yellow),
            'M' => Some(Suit::Magenta),
            'G' => Some(Suit::Green),
            'R' => Some(Suit::Rocket),
            _ => None,
        }
    }

    /// Highest legal card value in this suit (colours run 1..=9, Rocket 1..=4)
    pub fn max_value(&self) -> u8 {
        match self {
            Suit::Rocket => 4,
            _ => 9,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A playing card. Cards compare only within one suit; equality is by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Card {
    pub suit: Suit,
    pub value: u8,
}

impl Card {
    pub fn new(suit: Suit, value: u8) -> Self {
        Self { suit, value }
    }

    /// Whether the value is in range for the suit
    pub fn is_legal(&self) -> bool {
        self.value >= 1 && self.value <= self.suit.max_value()
    }

    /// Card code for transmission (e.g. "B7", "R4")
    pub fn code(&self) -> String {
        format!("{}{}", self.suit, self.value)
    }

    /// Parse a card code like "B7". Rejects unknown suits and values
    /// outside the suit's range.
    pub fn from_code(code: &str) -> Result<Self, String> {
        let mut chars = code.chars();
        let suit = chars
            .next()
            .and_then(Suit::from_letter)
            .ok_or_else(|| format!("Bad card suit in `{code}`"))?;
        let value: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| format!("Bad card value in `{code}`"))?;

        let card = Card::new(suit, value);
        if !card.is_legal() {
            return Err(format!("Bad card value in `{code}`"));
        }
        Ok(card)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
