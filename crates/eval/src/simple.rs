// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rule based five cards hand classifier.
use crate::score::{self, HandRank, HandScore};
use crate::Ranker;

/// Scores hands by checking each category from strongest to weakest and
/// stopping at the first match.
///
/// The five rank scores are sorted strongest first; whenever a matched
/// category has grouped ranks the group moves in front of the kickers so
/// the packed score breaks ties left to right.
#[derive(Debug, Default, Clone)]
pub struct SimpleRanker;

impl SimpleRanker {
    /// Creates a rule based ranker.
    pub fn new() -> Self {
        Self
    }
}

impl Ranker for SimpleRanker {
    fn score_hand(&self, cards: &[u8]) -> HandScore {
        debug_assert_eq!(cards.len(), 5);

        let ranks = score::sorted_ranks(cards);
        let suited = score::flush(cards);
        let run = score::straight(&ranks);

        if ranks[0] == ranks[4] {
            return HandScore::pack(HandRank::FiveOfAKind, ranks);
        }

        if suited {
            return match run {
                Some(run) => HandScore::pack(HandRank::StraightFlush, run),
                None => HandScore::pack(HandRank::Flush, ranks),
            };
        }

        // Quads: the kicker is either the last or the first rank.
        if ranks[0] == ranks[3] {
            return HandScore::pack(HandRank::FourOfAKind, ranks);
        }
        if ranks[1] == ranks[4] {
            return HandScore::pack(HandRank::FourOfAKind, reorder(ranks, [1, 2, 3, 4, 0]));
        }

        // Full house: trip in front of the pair.
        if ranks[0] == ranks[2] && ranks[3] == ranks[4] {
            return HandScore::pack(HandRank::FullHouse, ranks);
        }
        if ranks[0] == ranks[1] && ranks[2] == ranks[4] {
            return HandScore::pack(HandRank::FullHouse, reorder(ranks, [2, 3, 4, 0, 1]));
        }

        if let Some(run) = run {
            return HandScore::pack(HandRank::Straight, run);
        }

        // Trips: three positions for the group.
        if ranks[0] == ranks[2] {
            return HandScore::pack(HandRank::ThreeOfAKind, ranks);
        }
        if ranks[1] == ranks[3] {
            return HandScore::pack(HandRank::ThreeOfAKind, reorder(ranks, [1, 2, 3, 0, 4]));
        }
        if ranks[2] == ranks[4] {
            return HandScore::pack(HandRank::ThreeOfAKind, reorder(ranks, [2, 3, 4, 0, 1]));
        }

        // Two pair: the higher pair is already in front after sorting.
        if ranks[0] == ranks[1] && ranks[2] == ranks[3] {
            return HandScore::pack(HandRank::TwoPair, ranks);
        }
        if ranks[0] == ranks[1] && ranks[3] == ranks[4] {
            return HandScore::pack(HandRank::TwoPair, reorder(ranks, [0, 1, 3, 4, 2]));
        }
        if ranks[1] == ranks[2] && ranks[3] == ranks[4] {
            return HandScore::pack(HandRank::TwoPair, reorder(ranks, [1, 2, 3, 4, 0]));
        }

        // One pair: four positions for the pair.
        if ranks[0] == ranks[1] {
            return HandScore::pack(HandRank::OnePair, ranks);
        }
        if ranks[1] == ranks[2] {
            return HandScore::pack(HandRank::OnePair, reorder(ranks, [1, 2, 0, 3, 4]));
        }
        if ranks[2] == ranks[3] {
            return HandScore::pack(HandRank::OnePair, reorder(ranks, [2, 3, 0, 1, 4]));
        }
        if ranks[3] == ranks[4] {
            return HandScore::pack(HandRank::OnePair, reorder(ranks, [3, 4, 0, 1, 2]));
        }

        HandScore::pack(HandRank::HighCard, ranks)
    }
}

/// Applies a fixed permutation to the sorted rank scores.
fn reorder(ranks: [u8; 5], order: [usize; 5]) -> [u8; 5] {
    order.map(|i| ranks[i])
}
