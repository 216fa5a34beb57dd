//! Integration tests for the adapter layer: lifting fallible and panicking
//! callables into Either, and composing the point-free combinators.

use std::collections::HashMap;
use std::num::ParseIntError;

use either_ops::prelude::*;
use either_ops::{assert_left, assert_right};

// ============================================================================
// Parsing pipelines
// ============================================================================

const INPUT: [&str; 4] = ["0", "1", "2", "Fnord"];

#[test]
fn parse_filter_failing() {
    let ints: Vec<i32> = INPUT
        .into_iter()
        .map(ops::from_function(|s: &str| s.parse::<i32>()))
        .flat_map(Either::stream)
        .collect();

    assert_eq!(ints, vec![0, 1, 2]);
}

#[test]
fn parse_replace_failing() {
    let ints: Vec<i32> = INPUT
        .into_iter()
        .map(ops::from_function(|s: &str| s.parse::<i32>()))
        .map(ops::or_else(|_| -1))
        .collect();

    assert_eq!(ints, vec![0, 1, 2, -1]);
}

#[test]
fn parse_failure_keeps_error_object() {
    let parse = ops::from_function(|s: &str| s.parse::<i32>());

    assert_right!(parse("42"), 42);

    let err: ParseIntError = parse("not a number").unwrap_left();
    assert_eq!(err, "not a number".parse::<i32>().unwrap_err());
}

#[test]
fn parse_errors_are_collected_separately() {
    let (errors, values) = either_ops::either::partition(
        INPUT
            .into_iter()
            .map(ops::from_function(|s: &str| s.parse::<u8>())),
    );

    assert_eq!(values, vec![0, 1, 2]);
    assert_eq!(errors.len(), 1);
}

// ============================================================================
// Panic capture
// ============================================================================

#[test]
fn catch_function_on_slice_index() {
    let data = vec![10, 20, 30];
    let lookup = ops::catch_function(|i: usize| data[i]);

    assert_right!(lookup(1), 20);

    let out_of_range = lookup(7).unwrap_left();
    let msg = out_of_range
        .message()
        .expect("index panics carry a message");
    assert!(msg.contains("index out of bounds"));
}

#[test]
fn caught_panic_payload_survives() {
    #[derive(Debug, PartialEq)]
    struct Rejected {
        code: u16,
    }

    let caught = Either::catch_supplier(|| -> () {
        std::panic::panic_any(Rejected { code: 451 })
    });
    let panic = caught.unwrap_left();

    assert_eq!(
        panic.payload().downcast_ref::<Rejected>(),
        Some(&Rejected { code: 451 })
    );
}

#[test]
fn panics_in_later_steps_propagate() {
    let result = std::panic::catch_unwind(|| {
        Either::catch_supplier(|| 1).map(|_| -> i32 { panic!("after the guard") })
    });

    assert!(result.is_err());
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn lookup_with_fallback() {
    let ports: HashMap<&str, u16> = [("http", 80), ("https", 443)].into_iter().collect();
    let to_either = ops::from_option("unknown scheme");

    assert_right!(to_either(ports.get("https").copied()), 443);
    assert_left!(to_either(ports.get("gopher").copied()), "unknown scheme");
}

#[test]
fn lookup_with_computed_fallback() {
    let scheme = "ftp";
    let to_either = ops::from_option_else(|| format!("no port for {}", scheme));

    assert_left!(to_either(None::<u16>), "no port for ftp".to_string());
    assert_right!(to_either(Some(21)), 21);
}

// ============================================================================
// Point-free composition
// ============================================================================

#[test]
fn composed_pipeline_of_point_free_steps() {
    let parse = ops::from_function(|s: &str| s.parse::<i64>());
    let describe_error = ops::left_map(|e: ParseIntError| e.to_string());
    let non_negative = ops::flat_map(|n: i64| {
        if n >= 0 {
            Either::right(n)
        } else {
            Either::left(format!("{} is negative", n))
        }
    });
    let render = ops::fold(
        |msg: String| format!("error: {}", msg),
        |n: i64| format!("ok: {}", n),
    );

    let pipeline = |s| render(non_negative(describe_error(parse(s))));

    assert_eq!(pipeline("12"), "ok: 12");
    assert_eq!(pipeline("-3"), "error: -3 is negative");
    assert!(pipeline("x").starts_with("error: invalid digit"));
}

#[test]
fn method_paths_compose_for_zero_argument_operations() {
    let swapped: Vec<Either<i32, &str>> = vec![Either::left("a"), Either::right(1)]
        .into_iter()
        .map(Either::swap)
        .collect();

    assert_eq!(swapped, vec![Either::right("a"), Either::left(1)]);

    let lefts: Vec<&str> = swapped
        .into_iter()
        .map(Either::swap)
        .filter_map(Either::left_option)
        .collect();
    assert_eq!(lefts, vec!["a"]);
}

#[test]
fn fallible_bi_function_over_pairs() {
    let checked_sub = ops::from_bi_function(|a: u32, b: u32| a.checked_sub(b).ok_or("underflow"));

    let results: Vec<Either<&str, u32>> = [(5, 3), (3, 5)]
        .into_iter()
        .map(|(a, b)| checked_sub(a, b))
        .collect();

    assert_eq!(results, vec![Either::right(2), Either::left("underflow")]);
}

#[test]
fn fallible_shim_attempt() {
    fn run_twice<F>(f: F) -> (Either<String, u8>, Either<String, u8>)
    where
        F: FallibleFunction<u8, u8, String>,
    {
        (f.attempt(1), f.attempt(0))
    }

    let (ok, err) = run_twice(|n: u8| {
        if n > 0 {
            Ok(n * 10)
        } else {
            Err("zero".to_string())
        }
    });

    assert_right!(ok, 10);
    assert_left!(err, "zero");
}
