use crate::cards::{Card, Rank};

/// Pre-computed properties of a 5-card hand, shared by all rank detectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandAnalysis {
    /// `(rank, count)` sorted by count desc, then rank desc. AAAKQ gives
    /// `[(A, 3), (K, 1), (Q, 1)]`.
    pub groups: Vec<(Rank, u8)>,
    pub is_flush: bool,
    /// Top rank of the straight, `Five` for the wheel (A-2-3-4-5).
    pub straight_top: Option<Rank>,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter(|r| counts[r.value() as usize] > 0)
            .map(|r| (r, counts[r.value() as usize]))
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        let first_suit = cards[0].suit();
        let is_flush = cards.iter().all(|c| c.suit() == first_suit);

        let mut ranks = [
            cards[0].rank(),
            cards[1].rank(),
            cards[2].rank(),
            cards[3].rank(),
            cards[4].rank(),
        ];
        ranks.sort_by(|a, b| b.cmp(a));
        let straight_top = straight_top(&ranks);

        Self { groups, is_flush, straight_top }
    }

    pub fn is_straight(&self) -> bool {
        self.straight_top.is_some()
    }

    /// Number of distinct ranks appearing exactly `n` times.
    pub fn count_of(&self, n: u8) -> usize {
        self.groups.iter().filter(|(_, c)| *c == n).count()
    }
}

/// `ranks` must be sorted descending.
fn straight_top(ranks: &[Rank; 5]) -> Option<Rank> {
    if (0..4).all(|i| ranks[i].value() == ranks[i + 1].value() + 1) {
        return Some(ranks[0]);
    }
    if *ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
        return Some(Rank::Five);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn hand(ranks: [Rank; 5], suits: [Suit; 5]) -> [Card; 5] {
        let mut out = [Card::new(Rank::Two, Suit::Clubs); 5];
        for i in 0..5 {
            out[i] = Card::new(ranks[i], suits[i]);
        }
        out
    }

    #[test]
    fn wheel_tops_at_five() {
        let cards = hand(
            [Rank::Ace, Rank::Four, Rank::Three, Rank::Five, Rank::Two],
            [Suit::Spades; 5],
        );
        let a = HandAnalysis::new(&cards);
        assert!(a.is_flush);
        assert_eq!(a.straight_top, Some(Rank::Five));
    }

    #[test]
    fn no_wrap_around_straight() {
        let cards = hand(
            [Rank::Queen, Rank::King, Rank::Ace, Rank::Two, Rank::Three],
            [Suit::Spades, Suit::Hearts, Suit::Spades, Suit::Spades, Suit::Spades],
        );
        let a = HandAnalysis::new(&cards);
        assert!(!a.is_flush);
        assert!(!a.is_straight());
    }

    #[test]
    fn groups_sorted_by_count_then_rank() {
        let cards = hand(
            [Rank::King, Rank::Four, Rank::King, Rank::Four, Rank::Ace],
            [Suit::Clubs, Suit::Clubs, Suit::Hearts, Suit::Hearts, Suit::Spades],
        );
        let a = HandAnalysis::new(&cards);
        assert_eq!(a.groups, vec![(Rank::King, 2), (Rank::Four, 2), (Rank::Ace, 1)]);
        assert_eq!(a.count_of(2), 2);
        assert_eq!(a.count_of(1), 1);
    }
}
