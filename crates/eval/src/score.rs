// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand score encoding.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank scores indexed by rank, deuce first.
///
/// A stronger rank gets a smaller score, the ace scores 0 and the deuce 12,
/// so that packed hand scores compare with lower meaning stronger.
const RANK_SCORE: [u8; 13] = [12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0];

/// The ace score in the 5-4-3-2-A straight, the one case where the ace
/// sorts below the deuce.
pub(crate) const ACE_LOW_SCORE: u8 = 13;

/// The wheel as it appears in sorted rank scores: A, 5, 4, 3, 2.
const WHEEL_SORTED: [u8; 5] = [0, 9, 10, 11, 12];

/// The canonical wheel rank vector with the low ace last, so the wheel
/// compares below every other straight.
const WHEEL_RANKS: [u8; 5] = [9, 10, 11, 12, ACE_LOW_SCORE];

/// Card rank scores indexed by card code, derived from the card encoding.
pub(crate) const CARD_RANK: [u8; 52] = card_ranks();

/// Card suits in `[0, 4)` indexed by card code.
pub(crate) const CARD_SUIT: [u8; 52] = card_suits();

const fn card_ranks() -> [u8; 52] {
    let mut ranks = [0; 52];
    let mut code = 0;
    while code < 52 {
        ranks[code] = RANK_SCORE[code >> 2];
        code += 1;
    }
    ranks
}

const fn card_suits() -> [u8; 52] {
    let mut suits = [0; 52];
    let mut code = 0;
    while code < 52 {
        suits[code] = (code & 3) as u8;
        code += 1;
    }
    suits
}

/// The ten hand categories ordered from strongest to weakest.
///
/// Five of a kind is unreachable from a single deck but duplicate card
/// codes are never rejected, so it stays part of the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum HandRank {
    FiveOfAKind = 0,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    OnePair,
    HighCard,
}

/// A five cards hand score.
///
/// Packs the hand category and the five rank scores in tie break order into
/// a single integer so that plain integer comparison reproduces Poker hand
/// ordering:
///
/// ```text
///   +--------+--------+--------+--------+
///   |00000000|hhhhrrrr|rrrrrrrr|rrrrrrrr|
///   +--------+--------+--------+--------+
///   h = hand category (five of a kind=0, ..., high card=9)
///   r = five rank scores, most significant to the comparison first
/// ```
///
/// Lower scores are stronger hands, equal scores are ties.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandScore(u32);

impl HandScore {
    /// Packs a category and the reordered rank scores into a score.
    pub(crate) fn pack(rank: HandRank, ranks: [u8; 5]) -> Self {
        Self(
            (rank as u32) << 20
                | (ranks[0] as u32) << 16
                | (ranks[1] as u32) << 12
                | (ranks[2] as u32) << 8
                | (ranks[3] as u32) << 4
                | ranks[4] as u32,
        )
    }

    /// Recreates a score from its raw value.
    pub(crate) fn from_value(value: u32) -> Self {
        Self(value)
    }

    /// The raw score value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandScore(0x{:06x})", self.0)
    }
}

/// Returns the straight rank vector for sorted rank scores, with the wheel
/// remapped to its canonical low ace form.
pub(crate) fn straight(ranks: &[u8; 5]) -> Option<[u8; 5]> {
    if (1..5).all(|i| ranks[i] == ranks[i - 1] + 1) {
        Some(*ranks)
    } else if *ranks == WHEEL_SORTED {
        Some(WHEEL_RANKS)
    } else {
        None
    }
}

/// Checks if all five cards share a suit.
pub(crate) fn flush(cards: &[u8]) -> bool {
    let suit = CARD_SUIT[cards[0] as usize];
    cards[1..].iter().all(|&c| CARD_SUIT[c as usize] == suit)
}

/// Returns the five rank scores sorted strongest first.
pub(crate) fn sorted_ranks(cards: &[u8]) -> [u8; 5] {
    debug_assert_eq!(cards.len(), 5);
    let mut ranks = [0u8; 5];
    for (rank, &card) in ranks.iter_mut().zip(cards) {
        *rank = CARD_RANK[card as usize];
    }
    ranks.sort_unstable();
    ranks
}
