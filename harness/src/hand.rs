//! Validated puzzle input.

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 4;

/// Smallest card value.
pub const MIN_CARD: i64 = 1;

/// Largest card value.
pub const MAX_CARD: i64 = 13;

/// Why a list of numbers is not a legal hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    /// Not exactly [`HAND_SIZE`] cards.
    WrongCount { found: usize },
    /// A card outside `MIN_CARD..=MAX_CARD`.
    OutOfRange { index: usize, value: i64 },
}

impl std::fmt::Display for HandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongCount { found } => {
                write!(f, "a hand has exactly {HAND_SIZE} cards, got {found}")
            }
            Self::OutOfRange { index, value } => write!(
                f,
                "card {index} is {value}, expected a value in {MIN_CARD}..={MAX_CARD}"
            ),
        }
    }
}

impl std::error::Error for HandError {}

/// Four cards, each in `1..=13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([i64; HAND_SIZE]);

impl Hand {
    /// Validate a hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::WrongCount`] or [`HandError::OutOfRange`].
    pub fn new(cards: &[i64]) -> Result<Self, HandError> {
        let cards: [i64; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::WrongCount { found: cards.len() })?;
        if let Some((index, &value)) = cards
            .iter()
            .enumerate()
            .find(|(_, v)| !(MIN_CARD..=MAX_CARD).contains(*v))
        {
            return Err(HandError::OutOfRange { index, value });
        }
        Ok(Self(cards))
    }

    #[must_use]
    pub fn cards(&self) -> &[i64] {
        &self.0
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
