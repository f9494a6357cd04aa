//! Puzzle Walkthrough
//!
//! This example plays a short game against a scripted oracle.
//!
//! Key concepts:
//! - Each call returns a new Zab; the old one is untouched
//! - History lines are all a player gets to see
//! - Oracle-backed functions fall back when the oracle is unhelpful
//!
//! Run with: cargo run --example puzzle_walkthrough

use std::sync::Arc;
use zab::core::{initial_state, Arg};
use zab::oracle::ScriptedOracle;
use zab::registry::Registry;

fn main() {
    println!("=== Puzzle Walkthrough ===\n");

    // Answers for rox("star"), vox("flamingo") and box("spider")
    let oracle = ScriptedOracle::new(["5", "Pink", "8", "Black"]);
    let registry = Registry::standard(Arc::new(oracle.clone()));

    let start = initial_state(10);
    println!("{}\n", start.describe());

    let steps: Vec<(&str, Vec<Arg>)> = vec![
        ("fin", vec![]),
        ("plox", vec![Arg::Int(4)]),
        ("rox", vec![Arg::from("star")]),
        ("vox", vec![Arg::from("flamingo")]),
        ("mox", vec![Arg::Int(9)]),
        ("box", vec![Arg::from("spider")]),
    ];

    let mut zab = start.clone();
    for (name, args) in &steps {
        match zab.call(&registry, name, args) {
            Ok(next) => zab = next,
            Err(e) => println!("  ✗ {e}"),
        }
    }

    println!("History:");
    for line in zab.history().lines() {
        println!("  {line}");
    }

    println!("\nFinal state: {}", zab.describe());
    println!("Starting state still has {} entries", start.history().len());
    println!("Oracle was asked {} questions", oracle.prompts().len());

    println!("\n=== Example Complete ===");
}
