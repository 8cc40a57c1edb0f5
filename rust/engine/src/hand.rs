use crate::cards::Card;
use crate::errors::GameError;

/// Hand categories in ascending order of strength.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

/// The result of classifying a 5-card hand: a category plus a single
/// tiebreak value. The derived ordering compares category first, then
/// tiebreak, which is exactly the showdown comparison.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct HandStrength {
    pub category: Category,
    pub tiebreak: u8,
}

/// Classifies exactly 5 cards into a [`HandStrength`].
///
/// The classification is invariant to the order of the input cards. The Ace
/// only counts as 14, so A-2-3-4-5 is not a straight.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandStrength, GameError> {
    if cards.len() != 5 {
        return Err(GameError::InvalidHandSize(cards.len()));
    }

    let mut values = [0u8; 5];
    for (i, c) in cards.iter().enumerate() {
        values[i] = c.rank.value();
    }
    values.sort_unstable();

    // Signature computed once, then matched in precedence order.
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let is_straight = values.windows(2).all(|w| w[1] == w[0] + 1);
    let distinct = 1 + values.windows(2).filter(|w| w[1] != w[0]).count();
    // Any run of three equal sorted values passes through the middle card.
    let has_triple = values[0] == values[2] || values[1] == values[3] || values[2] == values[4];

    let strength = if is_straight && is_flush && values[0] == 10 {
        HandStrength {
            category: Category::RoyalFlush,
            tiebreak: 14,
        }
    } else if is_straight && is_flush {
        HandStrength {
            category: Category::StraightFlush,
            tiebreak: values[4],
        }
    } else if distinct == 2 && values[1] == values[2] && values[2] == values[3] {
        HandStrength {
            category: Category::FourOfAKind,
            tiebreak: values[2],
        }
    } else if distinct == 2 {
        // Not quads, so it splits 3 + 2; the triple owns the middle card.
        HandStrength {
            category: Category::FullHouse,
            tiebreak: values[2],
        }
    } else if is_flush {
        HandStrength {
            category: Category::Flush,
            tiebreak: values[4],
        }
    } else if is_straight {
        HandStrength {
            category: Category::Straight,
            tiebreak: values[4],
        }
    } else if distinct == 3 && has_triple {
        HandStrength {
            category: Category::ThreeOfAKind,
            tiebreak: values[2],
        }
    } else if distinct == 3 {
        // Two pairs and a kicker; the higher pair always covers position 3.
        HandStrength {
            category: Category::TwoPair,
            tiebreak: values[3],
        }
    } else if distinct == 4 {
        HandStrength {
            category: Category::OnePair,
            tiebreak: pair_value(&values),
        }
    } else {
        HandStrength {
            category: Category::HighCard,
            tiebreak: values[4],
        }
    };
    Ok(strength)
}

/// Best 5-card strength from two hole cards and the 5-card board, taken as
/// the maximum over all 21 five-card subsets.
pub fn best_of_seven(hole: &[Card], community: &[Card]) -> Result<HandStrength, GameError> {
    let cards: Vec<Card> = hole.iter().chain(community.iter()).copied().collect();
    if cards.len() != 7 {
        return Err(GameError::InvalidHandSize(cards.len()));
    }

    // any real hand beats this zero strength
    let mut best = HandStrength {
        category: Category::HighCard,
        tiebreak: 0,
    };
    for skip_a in 0..cards.len() {
        for skip_b in (skip_a + 1)..cards.len() {
            let five: Vec<Card> = cards
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip_a && *i != skip_b)
                .map(|(_, c)| *c)
                .collect();
            let strength = evaluate_hand(&five)?;
            if strength > best {
                best = strength;
            }
        }
    }
    Ok(best)
}

fn pair_value(sorted_values: &[u8; 5]) -> u8 {
    for w in sorted_values.windows(2) {
        if w[0] == w[1] {
            return w[0];
        }
    }
    0
}
