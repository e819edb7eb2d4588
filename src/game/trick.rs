use super::card::{Card, Suit};

/// Highest-valued card of `suit` among `cards`, if any. Trump is not
/// special here; the caller decides which suit matters.
pub fn winner_of_suit(cards: &[Card], suit: Suit) -> Option<Card> {
    cards
        .iter()
        .filter(|card| card.suit == suit)
        .max_by_key(|card| card.value)
        .copied()
}

/// Winning card of a completed trick: the highest Rocket if any Rocket was
/// played, otherwise the highest card following the lead suit (the suit of
/// the first card). Returns None only for an empty trick.
pub fn trick_winner(cards: &[Card]) -> Option<Card> {
    winner_of_suit(cards, Suit::Rocket).or_else(|| winner_of_suit(cards, cards.first()?.suit))
}

/// Position of the winning card within the trick (leader-first frame)
pub fn winner_index(cards: &[Card]) -> Option<usize> {
    let winner = trick_winner(cards)?;
    cards.iter().position(|card| *card == winner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        Card::from_code(code).unwrap()
    }

    fn cards(codes: &[&str]) -> Vec<Card> {
        codes.iter().map(|code| card(code)).collect()
    }

    #[test]
    fn test_winner_of_suit_empty() {
        assert_eq!(winner_of_suit(&[], Suit::Blue), None);
    }

    #[test]
    fn test_winner_of_suit_single_card() {
        assert_eq!(winner_of_suit(&cards(&["B8"]), Suit::Blue), Some(card("B8")));
    }

    #[test]
    fn test_winner_of_suit_higher_card_wins() {
        assert_eq!(
            winner_of_suit(&cards(&["B8", "B6"]), Suit::Blue),
            Some(card("B8"))
        );
        assert_eq!(
            winner_of_suit(&cards(&["B6", "B8"]), Suit::Blue),
            Some(card("B8"))
        );
    }

    #[test]
    fn test_winner_of_suit_ignores_offsuit() {
        assert_eq!(
            winner_of_suit(&cards(&["B8", "G9"]), Suit::Blue),
            Some(card("B8"))
        );
    }

    #[test]
    fn test_winner_of_suit_missing_suit() {
        assert_eq!(winner_of_suit(&cards(&["B8"]), Suit::Green), None);
        assert_eq!(
            winner_of_suit(&cards(&["B8", "G7", "M3", "Y1"]), Suit::Rocket),
            None
        );
    }

    #[test]
    fn test_winner_of_suit_trump_is_not_special() {
        assert_eq!(
            winner_of_suit(&cards(&["B1", "R4"]), Suit::Blue),
            Some(card("B1"))
        );
    }

    #[test]
    fn test_trick_winner_single_card() {
        assert_eq!(trick_winner(&cards(&["B4"])), Some(card("B4")));
    }

    #[test]
    fn test_trick_winner_same_suit() {
        assert_eq!(trick_winner(&cards(&["B4", "B7"])), Some(card("B7")));
        assert_eq!(trick_winner(&cards(&["B7", "B4"])), Some(card("B7")));
    }

    #[test]
    fn test_trick_winner_ignores_offsuit() {
        assert_eq!(trick_winner(&cards(&["B4", "G7"])), Some(card("B4")));
    }

    #[test]
    fn test_trick_winner_trump_wins() {
        assert_eq!(trick_winner(&cards(&["B4", "R2"])), Some(card("R2")));
    }

    #[test]
    fn test_trick_winner_multiple_trump() {
        assert_eq!(trick_winner(&cards(&["B4", "R2", "R4"])), Some(card("R4")));
    }

    #[test]
    fn test_trick_winner_trump_led() {
        assert_eq!(trick_winner(&cards(&["R2", "R4", "B4"])), Some(card("R4")));
    }

    #[test]
    fn test_trick_winner_empty() {
        assert_eq!(trick_winner(&[]), None);
    }

    #[test]
    fn test_winner_index() {
        assert_eq!(winner_index(&cards(&["B4", "B7", "B2", "M9"])), Some(1));
        assert_eq!(winner_index(&cards(&["B4", "M9", "R1", "B7"])), Some(2));
        assert_eq!(winner_index(&[]), None);
    }
}
