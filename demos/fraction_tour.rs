//! Fraction Tour
//!
//! Walks through construction, arithmetic, classification and the
//! expression evaluator.
//!
//! Run with: cargo run --example fraction_tour
//! Evaluate your own lines: cargo run --example fraction_tour -- "1/2 + 3" "2/3 ** -2"
//! Show reductions: RUST_LOG=trace cargo run --example fraction_tour

use anyhow::{Context, Result};
use log::info;
use quotient::prelude::*;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

// Built-in script used when no expressions are given on the command line.
const SCRIPT: &[&str] = &[
    "1/2 + 1/3",
    "1/2 + 2",
    "1/2 - 2",
    "4/-8 == -1/2",
    "1/2 == 0.5",
    "2/3 ** -1",
    "1/2 ~ 1/3",
    "1/2 / 0/1",
    "1.5 * 1/2",
];

fn main() -> Result<()> {
    env_logger::init();

    println!("╔════════════════════════════════════════════════════════════════════╗");
    println!("║                 Quotient: Exact Fraction Examples                  ║");
    println!("╚════════════════════════════════════════════════════════════════════╝\n");

    let lines: Vec<String> = std::env::args().skip(1).collect();
    if lines.is_empty() {
        example_1_basic_operations()?;
        example_2_properties()?;
        example_3_ordering()?;
        example_4_evaluator(SCRIPT.iter().copied());
    } else {
        example_4_evaluator(lines.iter().map(String::as_str));
    }

    Ok(())
}

fn header(title: &str) {
    println!("{RULE}");
    println!("{title}");
    println!("{RULE}\n");
}

/// Example 1: Basic Operations
fn example_1_basic_operations() -> Result<()> {
    header("Example 1: Basic Operations");

    let f1 = Fraction::new(1, 2)?;
    let f2 = Fraction::new(3, 4)?;

    println!("  Addition:       {f1} + {f2} = {}", f1 + f2);
    println!("  Subtraction:    {f1} - {f2} = {}", f1 - f2);
    println!("  Multiplication: {f1} * {f2} = {}", f1 * f2);
    println!("  Division:       {f1} / {f2} = {}", f1 / f2);
    println!("  Square:         {f2} ** 2 = {}", f2.pow(2));
    println!("  Reciprocal:     {f2} ** -1 = {}", f2.pow(-1));
    println!("  Absolute value: |{}| = {}", -f1, (-f1).abs());

    let reduced: Fraction = "1000000/2000000"
        .parse()
        .context("parsing a large fraction")?;
    println!("  Reduction:      1000000/2000000 = {reduced}");
    println!();

    Ok(())
}

/// Example 2: Properties and Conversions
fn example_2_properties() -> Result<()> {
    header("Example 2: Properties and Conversions");

    let f1 = Fraction::new(1, 2)?;
    let f2 = Fraction::new(3, 4)?;
    let five_halves = Fraction::new(5, 2)?;

    println!("  {five_halves} as a mixed number: {}", five_halves.to_mixed_string());
    println!("  {f1} is an integer: {}", f1.is_integer());
    println!("  {f2} is proper: {}", f2.is_proper());
    println!("  {f1} is zero: {}", f1.is_zero());
    println!("  {f1} is a unit fraction: {}", f1.is_unit());
    println!("  {f1} as a decimal: {}", f1.as_decimal());
    println!();

    Ok(())
}

/// Example 3: Ordering
fn example_3_ordering() -> Result<()> {
    header("Example 3: Ordering");

    let mut values = ["3/4", "-1/2", "2/3", "0", "-5/3", "7/7"]
        .iter()
        .map(|s| s.parse::<Fraction>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    values.sort();

    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    println!("  Sorted: {}", rendered.join(" < "));
    info!("sorted {} fractions", values.len());
    println!();

    Ok(())
}

/// Example 4: Expression Evaluator
fn example_4_evaluator<'a>(lines: impl Iterator<Item = &'a str>) {
    header("Example 4: Expression Evaluator");

    for line in lines {
        match evaluate(line) {
            Ok(value) => println!("  {line:<16} => {value}"),
            Err(err) => println!("  {line:<16} => error: {err}"),
        }
    }
    println!();
}
