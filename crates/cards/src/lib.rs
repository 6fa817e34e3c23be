// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! Each card maps to a dense code in `[0, 52)` that evaluators use as a
//! direct index into lookup tables:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let two_hearts = Card::new(Rank::Deuce, Suit::Hearts);
//! assert_eq!(two_hearts.code(), 0);
//!
//! let ace_spades = "AS".parse::<Card>().unwrap();
//! assert_eq!(ace_spades.code(), 51);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the
//! deck. For example to iterate through all 5 cards hands:
//!
//! ```
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(|_hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};
