// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Five cards hand evaluator with three interchangeable rankers:
//! [SimpleRanker] classifies hands with a strongest to weakest category
//! cascade, [MaskRanker] replaces the category cascade with constant table
//! lookups on a rank adjacency bitmask, and [LookupRanker] precomputes a
//! transition table so that scoring a hand costs five chained array
//! lookups with no classification at all. All three produce identical
//! scores for any five cards hand.
//!
//! A ranker maps card tokens to dense codes and five codes to a single
//! [HandScore]; scores order hands with lower meaning stronger and carry
//! no other information:
//!
//! ```
//! use showdown_eval::{Ranker, SimpleRanker};
//!
//! let ranker = SimpleRanker::new();
//! let flush = ["3H", "4H", "5H", "6H", "8H"].map(|t| ranker.score_card(t));
//! let trips = ["3C", "3D", "3S", "8C", "TD"].map(|t| ranker.score_card(t));
//! assert!(ranker.score_hand(&flush) < ranker.score_hand(&trips));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod lookup;
mod mask;
mod score;
mod simple;

pub use lookup::LookupRanker;
pub use mask::MaskRanker;
pub use score::HandScore;
pub use simple::SimpleRanker;

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};

/// A five cards Poker hand ranker.
///
/// Hands are scored in two steps: every card token maps to a dense code in
/// `[0, 52)`, and five codes map to a [HandScore] where lower scores are
/// stronger hands and equal scores are ties. The score is the whole
/// contract, neither the hand category nor the cards behind a score are
/// reported back.
pub trait Ranker {
    /// Maps a two characters card token, e.g. `AH` or `TC`, to its dense
    /// code in `[0, 52)`.
    ///
    /// Tokens are expected to be validated before they reach the ranker;
    /// panics on anything but the 52 valid tokens.
    fn score_card(&self, token: &str) -> u8 {
        match token.parse::<Card>() {
            Ok(card) => card.code(),
            Err(_) => panic!("invalid card token {token:?}"),
        }
    }

    /// Scores five card codes as returned by
    /// [score_card](Ranker::score_card).
    ///
    /// The score does not depend on the order of the cards. The hand is
    /// expected to hold exactly five valid codes; anything else is
    /// unspecified and may panic.
    fn score_hand(&self, cards: &[u8]) -> HandScore;
}
