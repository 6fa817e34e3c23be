// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example rank_all5
// SimpleRanker     elapsed: 0.152s  17123568 hands/sec
// MaskRanker       elapsed: 0.117s  22158379 hands/sec
// LookupRanker     elapsed: 0.031s  84284627 hands/sec (build 0.094s)
//
// All rankers agree on all hands.
// ```

use std::time::Instant;

use showdown_eval::{Deck, HandScore, LookupRanker, MaskRanker, Ranker, SimpleRanker};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_target(false)
        .init();

    let now = Instant::now();
    let lookup = LookupRanker::new();
    let build = now.elapsed().as_secs_f64();

    let simple_scores = rank_all("SimpleRanker", &SimpleRanker::new(), None);
    let mask_scores = rank_all("MaskRanker", &MaskRanker::new(), None);
    let lookup_scores = rank_all("LookupRanker", &lookup, Some(build));

    assert_eq!(simple_scores, mask_scores);
    assert_eq!(simple_scores, lookup_scores);
    println!("\nAll rankers agree on all hands.");
}

fn rank_all<R: Ranker>(name: &str, ranker: &R, build: Option<f64>) -> Vec<HandScore> {
    let mut scores = Vec::with_capacity(2_598_960);

    let now = Instant::now();
    Deck::default().for_each(|hand| {
        let cards = hand.map(|card| card.code());
        scores.push(ranker.score_hand(&cards));
    });
    let elapsed = now.elapsed().as_secs_f64();

    let rate = scores.len() as f64 / elapsed;
    match build {
        Some(build) => {
            println!("{name:16} elapsed: {elapsed:.3}s  {rate:.0} hands/sec (build {build:.3}s)")
        }
        None => println!("{name:16} elapsed: {elapsed:.3}s  {rate:.0} hands/sec"),
    }

    scores
}
