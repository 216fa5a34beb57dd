//! Demonstrates the events the adapters emit when they capture a failure
//!
//! Run with: cargo run --example tracing_demo --features tracing

use either_ops::{ops, Either};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    // Err values captured as Left are logged at TRACE
    let parse = ops::from_function(|s: &str| s.parse::<u8>());
    for raw in ["12", "300", "x"] {
        let outcome = parse(raw);
        tracing::info!(input = raw, outcome = kind(&outcome), "parsed");
    }

    // Panics captured as Left are logged at DEBUG
    let divide = ops::catch_bi_function(|a: i32, b: i32| a / b);
    match divide(1, 0) {
        Either::Left(panic) => tracing::warn!("division failed: {}", panic),
        Either::Right(n) => tracing::info!("division result: {}", n),
    }
}

fn kind<L, R>(e: &Either<L, R>) -> &'static str {
    if e.is_right() {
        "right"
    } else {
        "left"
    }
}
