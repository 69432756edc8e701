//! Shared helpers for the workspace lock tests.

#![forbid(unsafe_code)]

use thought_harness::hand::{MAX_CARD, MIN_CARD};

/// Every distinct hand (multiset of four cards in `1..=13`), in
/// non-decreasing card order. There are 1820 of them.
#[must_use]
pub fn all_hands() -> Vec<[i64; 4]> {
    let mut hands = Vec::new();
    for a in MIN_CARD..=MAX_CARD {
        for b in a..=MAX_CARD {
            for c in b..=MAX_CARD {
                for d in c..=MAX_CARD {
                    hands.push([a, b, c, d]);
                }
            }
        }
    }
    hands
}

/// Fixture key for a hand, e.g. `3_3_8_8`.
#[must_use]
pub fn hand_key(hand: &[i64]) -> String {
    hand.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_enumeration_is_complete() {
        let hands = all_hands();
        assert_eq!(hands.len(), 1820);
        assert_eq!(hands[0], [1, 1, 1, 1]);
        assert_eq!(hands[hands.len() - 1], [13, 13, 13, 13]);
    }

    #[test]
    fn hand_key_joins_cards() {
        assert_eq!(hand_key(&[3, 3, 8, 8]), "3_3_8_8");
    }
}
