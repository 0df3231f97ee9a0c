//! Filter Rules Example
//!
//! This example demonstrates how to build log-line and request filter rules
//! from small predicates, and how to watch their decisions with tracing.
//!
//! Run with: cargo run --example filter_rules --features tracing

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use predicate_compose::*;
use regex::Regex;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Filter Rules Example ===\n");

    log_line_rule();
    evaluation_order();
    sequence_rule();
    conditional_rule();
}

/// Keep error lines unless they were explicitly ignored
fn log_line_rule() {
    println!("--- Log Line Rule ---\n");

    let rule = string::starts_with("err")
        .traced("is_error")
        .and(not(string::contains("ignored")).traced("not_ignored"));

    for line in ["error: disk full", "error: ignored case", "warn: disk full"] {
        println!("  {:<22} -> {}", line, rule.check(line));
    }
    println!();
}

/// all_of stops early, any_of asks everyone
fn evaluation_order() {
    println!("--- Evaluation Order ---\n");

    let flags = [constant(false), constant(true), constant(true)];
    let traced = |name: &'static str, c: Const| PredicateTracingExt::<()>::traced(c, name);

    let and: AllOf<Traced<Const>> = all_of(
        ["first", "second", "third"]
            .into_iter()
            .zip(flags)
            .map(|(n, c)| traced(n, c)),
    );
    println!("  all_of: {}", and.check(&()));

    let or: AnyOf<Traced<Const>> = any_of(
        ["first", "second", "third"]
            .into_iter()
            .zip(flags)
            .map(|(n, c)| traced(n, c)),
    );
    println!("  any_of: {}", or.check(&()));
    println!("  xor_of: {}", xor_of(flags).check(&()));
    println!("  any_but: {}", any_but(flags).check(&()));
    println!();
}

/// Match paths by segment
fn sequence_rule() {
    println!("--- Sequence Rule ---\n");

    let system_tool = collection::starts_with(["usr"])
        .and(collection::contains_any(["bin", "sbin"]))
        .and(not(collection::is_empty()));

    let paths: [&[&str]; 3] = [
        &["usr", "local", "bin", "cargo"],
        &["home", "me", "bin", "tool"],
        &["usr", "share", "doc"],
    ];
    for path in paths {
        println!("  /{:<22} -> {}", path.join("/"), system_tool.check(path));
    }
    println!();
}

/// Gate a rule on state owned by the caller
fn conditional_rule() {
    println!("--- Conditional Rule ---\n");

    let maintenance = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&maintenance);

    let versioned = string::matches(Regex::new(r"^/api/v\d+/").unwrap());
    let serve = versioned.and(not(cond(move || flag.load(Ordering::Relaxed))));

    println!("  /api/v1/users (normal)      -> {}", serve.check("/api/v1/users"));
    maintenance.store(true, Ordering::Relaxed);
    println!("  /api/v1/users (maintenance) -> {}", serve.check("/api/v1/users"));
    println!();
}
