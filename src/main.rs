// src/main.rs

use std::env;
use std::error::Error;
use std::io::{self, Read};
use std::process;
use log::{debug, error, info};
use env_logger::Env;
use gf3poly::config::Gf3Config;
use gf3poly::{ArithmeticError, Polynomial};

fn main() {
    let config = Gf3Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration, using defaults: {}", e);
        Gf3Config::default()
    });

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str())).init();
    debug!("Loaded configuration: {:?}", config);

    let args: Vec<String> = env::args().skip(1).collect();
    let input = match input_from_args(&args) {
        Some(input) => input,
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                error!("Failed to read stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };

    if let Err(e) = run(&config, &input) {
        error!("{}", e);
        process::exit(1);
    }
}

/// Any arguments at all are taken as the input; stdin is read only when there are none.
fn input_from_args(args: &[String]) -> Option<String> {
    if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    }
}

/// Reads two brace-format polynomials `a` and `b` and prints their sum,
/// difference, product, quotient and remainder.
fn run(config: &Gf3Config, input: &str) -> Result<(), Box<dyn Error>> {
    let groups = braced_groups(input);
    if groups.len() < 2 {
        return Err(Box::new(ArithmeticError::Parse(format!(
            "expected two polynomials in brace format, found {}",
            groups.len()
        ))));
    }

    let a = Polynomial::parse_braced(groups[0], config.max_input_degree)?;
    let b = Polynomial::parse_braced(groups[1], config.max_input_degree)?;
    info!("a has degree {}, b has degree {}", a.degree(), b.degree());

    let var = config.variable_name.as_str();
    print_line("a", &a, var);
    print_line("b", &b, var);
    print_line("a + b", &(&a + &b), var);
    print_line("a - b", &(&a - &b), var);
    print_line("a * b", &(&a * &b), var);

    let (quotient, remainder) = a.div_rem(&b)?;
    print_line("a / b", &quotient, var);
    print_line("a % b", &remainder, var);

    verify_division(&a, &b, &quotient, &remainder)?;
    info!("Verified: quotient * b + remainder == a");

    Ok(())
}

fn verify_division(
    a: &Polynomial,
    b: &Polynomial,
    quotient: &Polynomial,
    remainder: &Polynomial,
) -> Result<(), Box<dyn Error>> {
    let reconstructed = &(quotient * b) + remainder;
    if reconstructed != *a {
        return Err(format!("Division check failed: {} * {} + {} = {} != {}", quotient, b, remainder, reconstructed, a).into());
    }
    if !remainder.is_zero() && remainder.degree() >= b.degree() {
        return Err(format!("Division check failed: remainder {} not reduced by {}", remainder, b).into());
    }
    Ok(())
}

fn print_line(label: &str, polynomial: &Polynomial, variable: &str) {
    println!("{:>6} = {}  ({})", label, polynomial, polynomial.to_string_with_variable(variable));
}

fn braced_groups(input: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut rest = input;
    while let Some(start) = rest.find('{') {
        match rest[start..].find('}') {
            Some(len) => {
                groups.push(&rest[start..start + len + 1]);
                rest = &rest[start + len + 1..];
            }
            None => {
                // Let the parser report the unterminated group.
                groups.push(&rest[start..]);
                break;
            }
        }
    }
    groups
}
