//! Parse Pipeline Example
//!
//! Demonstrates lifting a fallible parser into Either and consuming the
//! results in iterator pipelines.
//!
//! Patterns covered:
//! - Keeping only successful parses
//! - Replacing failures with a default
//! - Splitting successes from failures
//! - Describing each outcome with fold
//!
//! Run with: cargo run --example parse_pipeline

use either_ops::either::partition;
use either_ops::{ops, Either};

const INPUT: [&str; 5] = ["0", "1", "2", "Fnord", "-7"];

fn main() {
    let parse = ops::from_function(|s: &str| s.parse::<i32>());

    println!("\n=== Keep successes ===");
    let kept: Vec<i32> = INPUT
        .into_iter()
        .map(&parse)
        .flat_map(Either::stream)
        .collect();
    println!("  {:?}", kept);

    println!("\n=== Replace failures with -1 ===");
    let replaced: Vec<i32> = INPUT.into_iter().map(&parse).map(ops::or(-1)).collect();
    println!("  {:?}", replaced);

    println!("\n=== Split by outcome ===");
    let (errors, values) = partition(INPUT.into_iter().map(&parse));
    println!("  values: {:?}", values);
    for e in errors {
        println!("  error:  {}", e);
    }

    println!("\n=== Describe each input ===");
    let describe = ops::fold(
        |e: std::num::ParseIntError| format!("rejected ({})", e),
        |n: i32| format!("accepted {}", n),
    );
    for (raw, outcome) in INPUT.into_iter().zip(INPUT.into_iter().map(&parse)) {
        println!("  {:>6} -> {}", raw, describe(outcome));
    }
}
