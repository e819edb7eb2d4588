use crate::game::card::{Card, Suit};
use crate::game::hand::Hand;

/// One seat's contribution to a trick: the card put down and the hand left
/// behind after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub card: Card,
    pub remaining: Hand,
}

/// A completed trick in leader-first order, one turn per seat
pub type Play = Vec<Turn>;

/// Lazily enumerate every legal play for `hands` (hands[0] leads) under a
/// partially established lead suit. `None` means the leader has not chosen
/// yet and the first card's suit becomes the lead. A seat holding the lead
/// suit must follow it. Cards are tried in hand order, which keeps the
/// enumeration deterministic.
pub fn generate_plays<'a>(
    hands: &'a [Hand],
    lead_suit: Option<Suit>,
) -> Box<dyn Iterator<Item = Play> + 'a> {
    let Some((hand, rest)) = hands.split_first() else {
        return Box::new(std::iter::once(Play::new()));
    };

    let holding_lead = lead_suit.is_some_and(|suit| hand.holds_suit(suit));

    Box::new(
        hand.cards
            .iter()
            .enumerate()
            .filter(move |(_, card)| !holding_lead || Some(card.suit) == lead_suit)
            .flat_map(move |(index, &card)| {
                let picked_suit = lead_suit.unwrap_or(card.suit);
                let remaining = hand.without_index(index);
                generate_plays(rest, Some(picked_suit)).map(move |mut subplay| {
                    let mut play = Play::with_capacity(subplay.len() + 1);
                    play.push(Turn {
                        card,
                        remaining: remaining.clone(),
                    });
                    play.append(&mut subplay);
                    play
                })
            }),
    )
}
