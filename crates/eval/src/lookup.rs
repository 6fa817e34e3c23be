// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Transition table evaluator.
use ahash::AHashMap;
use log::debug;

use showdown_cards::Deck;

use crate::score::{CARD_RANK, CARD_SUIT, HandScore};
use crate::{Ranker, SimpleRanker};

/// Scores hands with five chained lookups in a precomputed table.
///
/// The table is a flat array over the states reachable by adding one card
/// at a time to an empty hand. A state is the multiset of ranks collected
/// so far plus a suit consistency flag; suit identity stops mattering once
/// two suits differ, which is what keeps the state space small. Non
/// terminal states own a block of 52 exits, one per next card, holding the
/// offset of the successor state block; five card states own a single slot
/// holding the final score. Scoring a hand walks one exit per card and
/// reads the terminal slot, no classification happens at evaluation time.
///
/// The table is built eagerly at construction by breadth first search and
/// never changes afterwards; the classifier used to score the terminal
/// states is injectable for equivalence testing.
pub struct LookupRanker {
    table: Vec<u32>,
}

/// Suit flag for a state that has seen more than one suit.
const BROKEN: u8 = 4;

/// Padding value for unused rank slots, sorts after every rank.
const NONE: u8 = 0xFF;

/// Flag set on terminal slots so scores never collide with table offsets.
const SCORE_FLAG: u32 = 1 << 24;

/// A partial hand state: the sorted rank scores collected so far and the
/// shared suit, [BROKEN] once mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct State {
    ranks: [u8; 5],
    len: u8,
    suit: u8,
}

impl State {
    fn root() -> State {
        State {
            ranks: [NONE; 5],
            len: 0,
            suit: BROKEN,
        }
    }

    /// The state reached by adding one more card.
    fn add(&self, card: u8) -> State {
        let suit = CARD_SUIT[card as usize];
        let suit = if self.len == 0 || self.suit == suit {
            suit
        } else {
            BROKEN
        };

        // Insert the rank keeping the prefix sorted.
        let rank = CARD_RANK[card as usize];
        let mut ranks = self.ranks;
        let mut i = self.len as usize;
        while i > 0 && ranks[i - 1] > rank {
            ranks[i] = ranks[i - 1];
            i -= 1;
        }
        ranks[i] = rank;

        State {
            ranks,
            len: self.len + 1,
            suit,
        }
    }

    /// Scores a representative hand for a five card state.
    ///
    /// A suited state uses its suit for all five cards; a broken state uses
    /// hearts for the first card and diamonds for the rest. Any concrete
    /// hand matching the state gets the same score since classification
    /// depends only on the rank multiset and suit uniformity.
    fn score<R: Ranker>(&self, ranker: &R) -> HandScore {
        debug_assert_eq!(self.len, 5);

        let mut cards = [0u8; 5];
        for (i, card) in cards.iter_mut().enumerate() {
            let rank = 12 - self.ranks[i];
            let suit = match (self.suit, i) {
                (BROKEN, 0) => 0,
                (BROKEN, _) => 1,
                (suit, _) => suit,
            };
            *card = rank * 4 + suit;
        }

        ranker.score_hand(&cards)
    }
}

impl LookupRanker {
    /// Builds the transition table scoring hands with [SimpleRanker].
    pub fn new() -> Self {
        Self::with_ranker(&SimpleRanker::new())
    }

    /// Builds the transition table scoring the five card states with the
    /// given classifier.
    pub fn with_ranker<R: Ranker>(ranker: &R) -> Self {
        let mut locations = AHashMap::default();
        let mut levels = Vec::with_capacity(6);

        locations.insert(State::root(), 0u32);
        levels.push(vec![State::root()]);

        // Discover the states level by level and assign each new state a
        // base offset, 52 exit slots for partial hands and one terminal
        // slot for five card hands. Locations are assigned level by level
        // so exits always point forward into the next level's blocks.
        let mut len = Deck::SIZE as u32;
        for depth in 1..=5usize {
            let mut level = Vec::new();
            for state in &levels[depth - 1] {
                for card in 0..Deck::SIZE as u8 {
                    let next = state.add(card);
                    if !locations.contains_key(&next) {
                        locations.insert(next, u32::MAX);
                        level.push(next);
                    }
                }
            }

            // Sort for a deterministic layout across builds.
            level.sort_unstable();
            let slots = if depth == 5 { 1 } else { Deck::SIZE as u32 };
            for state in &level {
                locations.insert(*state, len);
                len += slots;
            }
            levels.push(level);
        }

        assert!(len < SCORE_FLAG, "table offsets overflow the score flag");

        let mut table = vec![0u32; len as usize];
        for (depth, level) in levels.iter().enumerate() {
            for state in level {
                let base = locations[state] as usize;
                if depth == 5 {
                    table[base] = state.score(ranker).value() | SCORE_FLAG;
                } else {
                    for card in 0..Deck::SIZE {
                        table[base + card] = locations[&state.add(card as u8)];
                    }
                }
            }
        }

        debug!(
            "lookup table built: {} states, {} slots",
            locations.len(),
            table.len()
        );

        Self { table }
    }
}

impl Default for LookupRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker for LookupRanker {
    fn score_hand(&self, cards: &[u8]) -> HandScore {
        debug_assert_eq!(cards.len(), 5);

        let t = &self.table;
        let hop = t[cards[0] as usize] as usize;
        let hop = t[hop + cards[1] as usize] as usize;
        let hop = t[hop + cards[2] as usize] as usize;
        let hop = t[hop + cards[3] as usize] as usize;
        let hop = t[hop + cards[4] as usize] as usize;

        let score = t[hop];
        debug_assert!(score >= SCORE_FLAG);
        HandScore::from_value(score & !SCORE_FLAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MaskRanker;
    use showdown_cards::Card;

    fn score(ranker: &impl Ranker, hand: &[&str; 5]) -> HandScore {
        let cards = hand.map(|token| ranker.score_card(token));
        ranker.score_hand(&cards)
    }

    #[test]
    fn states_merge_by_rank_multiset_and_suit() {
        // Adding the same ranks in any order reaches the same state, and
        // every mixed suit pattern collapses into the broken state.
        let s1 = State::root().add(0).add(5).add(10); // 2H 3D 4C
        let s2 = State::root().add(10).add(1).add(4); // 4C 2D 3H
        assert_eq!(s1, s2);

        let suited = State::root().add(0).add(4).add(8); // 2H 3H 4H
        assert_ne!(s1, suited);
        assert_eq!(suited.suit, 0);
        assert_eq!(s1.suit, BROKEN);
    }

    #[test]
    fn scores_match_the_rule_ranker() {
        let hands = [
            ["2H", "3H", "5H", "6H", "4H"], // straight flush
            ["5H", "4H", "3H", "2H", "AH"], // wheel flush
            ["2H", "2D", "2C", "2S", "4H"], // quads
            ["8H", "8D", "8C", "AS", "AH"], // full house
            ["2H", "3H", "5H", "6H", "7H"], // flush
            ["2H", "3H", "5H", "6H", "4C"], // straight
            ["5S", "4S", "3S", "2S", "AC"], // wheel
            ["2H", "2D", "2C", "6H", "7H"], // trips
            ["2H", "2D", "3C", "3H", "7H"], // two pair
            ["2H", "2D", "3C", "6H", "7H"], // pair
            ["2H", "3D", "9C", "6H", "7H"], // high card
        ];

        let (lookup, simple) = (LookupRanker::new(), SimpleRanker::new());
        for hand in &hands {
            assert_eq!(
                score(&lookup, hand),
                score(&simple, hand),
                "hand {hand:?} diverges"
            );
        }
    }

    #[test]
    fn mask_ranker_builds_the_same_scores_for_real_hands() {
        let lookup = LookupRanker::with_ranker(&MaskRanker::new());
        let mask = MaskRanker::new();

        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let mut cards = Vec::with_capacity(Deck::SIZE);
        while !deck.is_empty() {
            cards.push(deck.deal().code());
        }

        for hand in cards.chunks_exact(5) {
            assert_eq!(lookup.score_hand(hand), mask.score_hand(hand));
        }
    }

    #[test]
    fn evaluation_is_permutation_invariant() {
        let lookup = LookupRanker::new();

        // The wheel, every input order.
        let hand = ["2H", "3H", "4C", "5H", "AH"].map(|t| lookup.score_card(t));
        let expected = lookup.score_hand(&hand);

        let mut cards = hand;
        permute(&lookup, &mut cards, 0, expected);

        fn permute(ranker: &LookupRanker, cards: &mut [u8; 5], k: usize, expected: HandScore) {
            if k == 5 {
                assert_eq!(ranker.score_hand(cards), expected);
                return;
            }
            for i in k..5 {
                cards.swap(k, i);
                permute(ranker, cards, k + 1, expected);
                cards.swap(k, i);
            }
        }
    }

    #[test]
    fn terminal_states_score_with_any_representative() {
        // A broken suit state must score like any concrete non flush hand
        // with the same ranks.
        let simple = SimpleRanker::new();
        let state = State::root().add(0).add(1).add(2).add(3).add(16); // 2222 6
        let quads = ["2H", "2D", "2C", "2S", "6H"].map(|t| simple.score_card(t));
        assert_eq!(state.score(&simple), simple.score_hand(&quads));

        let card = |t: &str| t.parse::<Card>().unwrap().code();
        let suited = State::root()
            .add(card("2H"))
            .add(card("3H"))
            .add(card("4H"))
            .add(card("5H"))
            .add(card("7H"));
        let flush = ["2H", "3H", "4H", "5H", "7H"].map(|t| simple.score_card(t));
        assert_eq!(suited.score(&simple), simple.score_hand(&flush));
    }
}
