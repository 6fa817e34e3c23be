// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bit pattern driven five cards hand classifier.
use crate::score::{self, HandRank, HandScore};
use crate::Ranker;

/// Scores hands by table lookup on a rank adjacency mask.
///
/// Flushes and straights are detected directly on the suits and sorted
/// ranks. Every other category depends only on which neighbors of the
/// sorted rank scores are equal: the four comparisons build a 4 bit mask,
/// bit `i` set when `rank[i] == rank[i + 1]`, and two 16 entry tables map
/// the mask to the category and to the permutation that moves grouped
/// ranks in front of the kickers. This replaces the category cascade with
/// a single lookup.
#[derive(Debug, Default, Clone)]
pub struct MaskRanker;

/// Hand category for each adjacency mask.
const MASK_RANK: [HandRank; 16] = [
    HandRank::HighCard,      // 0000
    HandRank::OnePair,       // 0001
    HandRank::OnePair,       // 0010
    HandRank::ThreeOfAKind,  // 0011
    HandRank::OnePair,       // 0100
    HandRank::TwoPair,       // 0101
    HandRank::ThreeOfAKind,  // 0110
    HandRank::FourOfAKind,   // 0111
    HandRank::OnePair,       // 1000
    HandRank::TwoPair,       // 1001
    HandRank::TwoPair,       // 1010
    HandRank::FullHouse,     // 1011
    HandRank::ThreeOfAKind,  // 1100
    HandRank::FullHouse,     // 1101
    HandRank::FourOfAKind,   // 1110
    HandRank::FiveOfAKind,   // 1111
];

/// Reorder permutation for each adjacency mask.
///
/// The ranks are sorted strongest first, so when two groups have the same
/// size the stronger one already leads and every entry is a fixed
/// permutation.
const MASK_ORDER: [[usize; 5]; 16] = [
    [0, 1, 2, 3, 4], // 0000
    [0, 1, 2, 3, 4], // 0001 pair leads
    [1, 2, 0, 3, 4], // 0010
    [0, 1, 2, 3, 4], // 0011 trip leads
    [2, 3, 0, 1, 4], // 0100
    [0, 1, 2, 3, 4], // 0101 higher pair leads
    [1, 2, 3, 0, 4], // 0110
    [0, 1, 2, 3, 4], // 0111 quad leads
    [3, 4, 0, 1, 2], // 1000
    [0, 1, 3, 4, 2], // 1001
    [1, 2, 3, 4, 0], // 1010
    [0, 1, 2, 3, 4], // 1011 trip leads
    [2, 3, 4, 0, 1], // 1100
    [2, 3, 4, 0, 1], // 1101
    [1, 2, 3, 4, 0], // 1110
    [0, 1, 2, 3, 4], // 1111
];

impl MaskRanker {
    /// Creates a mask driven ranker.
    pub fn new() -> Self {
        Self
    }
}

impl Ranker for MaskRanker {
    fn score_hand(&self, cards: &[u8]) -> HandScore {
        debug_assert_eq!(cards.len(), 5);

        let ranks = score::sorted_ranks(cards);

        if score::flush(cards) {
            return match score::straight(&ranks) {
                Some(run) => HandScore::pack(HandRank::StraightFlush, run),
                None => HandScore::pack(HandRank::Flush, ranks),
            };
        }
        if let Some(run) = score::straight(&ranks) {
            return HandScore::pack(HandRank::Straight, run);
        }

        let mut mask = 0;
        for (i, pair) in ranks.windows(2).enumerate() {
            if pair[0] == pair[1] {
                mask |= 1 << i;
            }
        }

        let ordered = MASK_ORDER[mask].map(|i| ranks[i]);
        HandScore::pack(MASK_RANK[mask], ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimpleRanker;

    fn score(ranker: &impl Ranker, hand: &[&str; 5]) -> HandScore {
        let cards = hand.map(|token| ranker.score_card(token));
        ranker.score_hand(&cards)
    }

    #[test]
    fn all_group_masks_match_the_rule_ranker() {
        // One hand for every reachable adjacency mask, plus straights and
        // flushes that bypass the mask path.
        let hands = [
            ["2H", "3D", "9C", "6H", "7H"], // 0000 high card
            ["AH", "AD", "3C", "6H", "7H"], // 0001 pair leads
            ["AH", "9D", "9C", "7H", "2H"], // 0010 pair second
            ["AH", "AD", "AC", "6H", "7H"], // 0011 trip leads
            ["AH", "KD", "9C", "9H", "2H"], // 0100 pair third
            ["AH", "AD", "9C", "9H", "2H"], // 0101 two pair
            ["AH", "9D", "9C", "9H", "2S"], // 0110 trip second
            ["8H", "8D", "8C", "8S", "7H"], // 0111 quad leads
            ["9H", "8D", "4C", "2H", "2D"], // 1000 pair last
            ["QH", "QD", "8C", "3H", "3D"], // 1001 pairs split
            ["9H", "5D", "5C", "2H", "2D"], // 1010 pairs trail
            ["KH", "KD", "KC", "2H", "2D"], // 1011 full house
            ["AH", "KD", "4C", "4H", "4D"], // 1100 trip last
            ["9H", "9D", "4C", "4H", "4D"], // 1101 full house
            ["AH", "8D", "8C", "8H", "8S"], // 1110 quad last
            ["8H", "8D", "8C", "8H", "8S"], // 1111 five of a kind
            ["2H", "3H", "5H", "6H", "4C"], // straight
            ["5S", "4S", "3S", "2S", "AC"], // wheel
            ["2H", "3H", "5H", "6H", "7H"], // flush
            ["2H", "3H", "5H", "6H", "4H"], // straight flush
            ["5H", "4H", "3H", "2H", "AH"], // wheel flush
        ];

        let (mask, simple) = (MaskRanker::new(), SimpleRanker::new());
        for hand in &hands {
            assert_eq!(
                score(&mask, hand),
                score(&simple, hand),
                "hand {hand:?} diverges"
            );
        }
    }

    #[test]
    fn categories_order_strongest_to_weakest() {
        let hands = [
            ["2H", "3H", "5H", "6H", "4H"], // straight flush
            ["2H", "2D", "2C", "2S", "4H"], // quads
            ["8H", "8D", "8C", "AS", "AH"], // full house
            ["2H", "3H", "5H", "6H", "7H"], // flush
            ["2H", "3H", "5H", "6H", "4C"], // straight
            ["2H", "2D", "2C", "6H", "7H"], // trips
            ["2H", "2D", "3C", "3H", "7H"], // two pair
            ["2H", "2D", "3C", "6H", "7H"], // pair
            ["2H", "3D", "9C", "6H", "7H"], // high card
        ];

        let ranker = MaskRanker::new();
        for pair in hands.windows(2) {
            assert!(score(&ranker, &pair[0]) < score(&ranker, &pair[1]));
        }
    }
}
