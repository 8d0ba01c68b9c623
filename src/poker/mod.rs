//! Five-card poker hand ranking.
//!
//! ```
//! use kata_rs::poker::{rank_hand_str, PokerRank};
//!
//! let rank = rank_hand_str(&["A♠", "4♠", "3♠", "5♠", "2♠"]).unwrap();
//! assert_eq!(rank, PokerRank::StraightFlush);
//! ```

pub(crate) mod analysis;
pub(crate) mod detector;

use crate::cards::{parse_cards, Card, CardParseError};
use analysis::HandAnalysis;
use detector::DETECTORS;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Hand rank from weakest to strongest; the discriminant is the rank score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PokerRank {
    HighCard = 0,
    OnePair = 1,
    TwoPairs = 2,
    ThreeOfKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfKind = 7,
    StraightFlush = 8,
}

impl PokerRank {
    pub const fn score(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for PokerRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PokerRank::HighCard => "high card",
            PokerRank::OnePair => "one pair",
            PokerRank::TwoPairs => "two pairs",
            PokerRank::ThreeOfKind => "three of a kind",
            PokerRank::Straight => "straight",
            PokerRank::Flush => "flush",
            PokerRank::FullHouse => "full house",
            PokerRank::FourOfKind => "four of a kind",
            PokerRank::StraightFlush => "straight flush",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly five cards, got {0}")]
    CardCount(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(#[from] CardParseError),
}

/// Five distinct cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; 5]);

impl Hand {
    pub fn try_new(cards: [Card; 5]) -> Result<Self, HandError> {
        let mut seen = HashSet::with_capacity(5);
        for card in cards {
            if !seen.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; 5] = slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Self::try_new(cards)
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }

    pub fn rank(&self) -> PokerRank {
        rank_hand(&self.0)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Self::from_slice(&cards)
    }
}

/// Classify five cards. Aces play high or low in straights.
pub fn rank_hand(cards: &[Card; 5]) -> PokerRank {
    let analysis = HandAnalysis::new(cards);
    DETECTORS
        .iter()
        .find(|d| d.detect(&analysis))
        .map(|d| d.rank())
        .unwrap_or(PokerRank::HighCard)
}

/// Parse and classify a hand given as card strings such as `"10♥"`.
pub fn rank_hand_str(hand: &[&str]) -> Result<PokerRank, HandError> {
    let cards = hand.iter().map(|s| s.parse::<Card>()).collect::<Result<Vec<_>, _>>()?;
    Ok(Hand::from_slice(&cards)?.rank())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_follow_strength() {
        assert_eq!(PokerRank::HighCard.score(), 0);
        assert_eq!(PokerRank::StraightFlush.score(), 8);
        assert!(PokerRank::FullHouse > PokerRank::Flush);
    }

    #[test]
    fn hand_rejects_duplicates_and_wrong_size() {
        let res: Result<Hand, _> = "A♠ A♠ 2♥ 3♥ 4♥".parse();
        assert!(matches!(res, Err(HandError::DuplicateCard(_))));
        let res: Result<Hand, _> = "A♠ K♠".parse();
        assert_eq!(res, Err(HandError::CardCount(2)));
        let res = rank_hand_str(&["A♠", "K♠", "Q♠", "J♠", "1♠"]);
        assert!(matches!(res, Err(HandError::CardParse(_))));
    }

    #[test]
    fn hand_parses_and_ranks() {
        let hand: Hand = "4♣ 4♦ 5♦ 5♠ 5♥".parse().unwrap();
        assert_eq!(hand.rank(), PokerRank::FullHouse);
        assert_eq!(hand.cards().len(), 5);
    }

    #[test]
    fn display_names() {
        assert_eq!(PokerRank::TwoPairs.to_string(), "two pairs");
    }
}
