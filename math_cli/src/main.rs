//! # Mathsteps CLI
//!
//! Terminal demo for the calculation engine: prompts for a fraction
//! operation, prints the result with its worked steps, and dumps the JSON
//! form of the result record.

use std::io::{self, BufRead, Write};

use math_core::calculators::fraction::{self, Fraction, FractionOp};
use math_core::catalog::ALL_CALCULATORS;

fn prompt_i64(prompt: &str, default: i64) -> i64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_op(prompt: &str) -> FractionOp {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return FractionOp::Add;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return FractionOp::Add;
    }

    match input.trim() {
        "-" => FractionOp::Subtract,
        "*" | "×" => FractionOp::Multiply,
        "/" | "÷" => FractionOp::Divide,
        _ => FractionOp::Add,
    }
}

fn main() {
    println!("Mathsteps CLI - Calculation & Derivation Engine");
    println!("===============================================");
    println!();
    println!("{} calculators available; running the fraction demo.", ALL_CALCULATORS.len());
    println!();

    let n1 = prompt_i64("First numerator [1]: ", 1);
    let d1 = prompt_i64("First denominator [2]: ", 2);
    let n2 = prompt_i64("Second numerator [1]: ", 1);
    let d2 = prompt_i64("Second denominator [3]: ", 3);
    let op = prompt_op("Operation (+, -, *, /) [+]: ");

    let (a, b) = match (Fraction::new(n1, d1), Fraction::new(n2, d2)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!();
    match fraction::calculate(a, b, op) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  FRACTION CALCULATION RESULT");
            println!("═══════════════════════════════════════");
            println!();
            println!("Result:  {}", result.value);
            if let Some(mixed) = &result.mixed {
                println!("Mixed:   {}", mixed);
            }
            println!("Decimal: {}", result.decimal);
            println!();
            println!("Steps:");
            for (i, step) in result.steps.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }

            println!();
            println!("JSON Output (for UI/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
