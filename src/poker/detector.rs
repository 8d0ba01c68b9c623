use super::analysis::HandAnalysis;
use super::PokerRank;

/// Strategy pattern: each detector recognizes one rank.
pub(crate) trait RankDetector {
    fn rank(&self) -> PokerRank;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

struct StraightFlush;
struct FourOfKind;
struct FullHouse;
struct Flush;
struct Straight;
struct ThreeOfKind;
struct TwoPairs;
struct OnePair;

impl RankDetector for StraightFlush {
    fn rank(&self) -> PokerRank {
        PokerRank::StraightFlush
    }
    fn detect(&self, a: &HandAnalysis) -> bool {
        a.is_flush && a.is_straight()
    }
}

impl RankDetector for FourOfKind {
    fn rank(&self) -> PokerRank {
        PokerRank::FourOfKind
    }
    fn detect(&self, a: &HandAnalysis) -> bool {
        a.count_of(4) == 1
    }
}

impl RankDetector for FullHouse {
    fn rank(&self) -> PokerRank {
        PokerRank::FullHouse
    }
    fn detect(&self, a: &HandAnalysis) -> bool {
        a.count_of(3) == 1 && a.count_of(2) == 1
    }
}

impl RankDetector for Flush {
    fn rank(&self) -> PokerRank {
        PokerRank::Flush
    }
    fn detect(&self, a: &HandAnalysis) -> bool {
        a.is_flush
    }
}

impl RankDetector for Straight {
    fn rank(&self) -> PokerRank {
        PokerRank::Straight
    }
    fn detect(&self, a: &HandAnalysis) -> bool {
        a.is_straight()
    }
}

impl RankDetector for ThreeOfKind {
    fn rank(&self) -> PokerRank {
        PokerRank::ThreeOfKind
    }
    fn detect(&self, a: &HandAnalysis) -> bool {
        a.count_of(3) == 1
    }
}

impl RankDetector for TwoPairs {
    fn rank(&self) -> PokerRank {
        PokerRank::TwoPairs
    }
    fn detect(&self, a: &HandAnalysis) -> bool {
        a.count_of(2) == 2
    }
}

impl RankDetector for OnePair {
    fn rank(&self) -> PokerRank {
        PokerRank::OnePair
    }
    fn detect(&self, a: &HandAnalysis) -> bool {
        a.count_of(2) == 1
    }
}

/// Highest rank first; the first match wins.
pub(crate) const DETECTORS: [&dyn RankDetector; 8] = [
    &StraightFlush,
    &FourOfKind,
    &FullHouse,
    &Flush,
    &Straight,
    &ThreeOfKind,
    &TwoPairs,
    &OnePair,
];
