//! # Rubix Bakery Terminal
//!
//! Interactive CLI: prompts for a quantity per product, then prints the
//! priced pack breakdown.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  env config ──► catalogue ──► quantity prompts ──► process_order        │
//! │                                                         │               │
//! │                                                         ▼               │
//! │                                                  priced receipt         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod display;

use std::io::{self, BufRead, Write};

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bakery_core::{parse_quantity, Bakery, Order, Product, Quantizer};

use crate::config::AppConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first: a bad env var should fail before any output
    let config = AppConfig::load()?;

    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(if config.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_target(false)
        .init();

    info!(
        debug = config.debug,
        price_decimal_places = config.price_decimal_places,
        "Configuration loaded"
    );

    let bakery = build_catalogue(&config);

    println!("Welcome to Rubix bakery, we provide:");
    println!("{}", "=".repeat(60));
    for product in bakery.products().values() {
        display::print_product(product);
    }

    let stdin = io::stdin();
    let mut requests = Vec::new();
    for product in bakery.products().values() {
        let quantity = prompt_quantity(&mut stdin.lock(), product.name())?;
        requests.push((product.code().to_string(), quantity));
    }

    let mut order = Order::new(requests);

    println!("\nYour order:");
    println!("{}", "=".repeat(60));
    display::print_order(&order, &bakery)?;

    bakery.process_order(&mut order)?;

    println!("\n\nYour best pack breakdown:");
    println!("{}", "=".repeat(60));
    display::print_result(&order, &bakery)?;

    Ok(())
}

/// The store catalogue, hard-coded at start.
fn build_catalogue(config: &AppConfig) -> Bakery {
    let quantizer = Quantizer::new(config.price_decimal_places);

    let vs = Product::new(
        "Vegemite Scroll",
        "VS5",
        &[("3", "6.99"), ("5", "8.99")],
        &quantizer,
    );
    let mb = Product::new(
        "Blueberry Muffin",
        "MB11",
        &[("2", "9.95"), ("5", "16.95"), ("8", "24.95")],
        &quantizer,
    );
    let cf = Product::new(
        "Croissant",
        "CF",
        &[("3", "5.95"), ("5", "9.95"), ("9", "16.99")],
        &quantizer,
    );

    Bakery::new(vec![vs, mb, cf])
}

/// Prompts until the input parses as a non-negative integer.
fn prompt_quantity(input: &mut impl BufRead, name: &str) -> io::Result<u64> {
    println!("Please input how many {name} you want:");
    loop {
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF: treat as an empty request for this product
            return Ok(0);
        }
        match parse_quantity(&line) {
            Ok(quantity) => return Ok(quantity),
            Err(_) => println!(
                "`{}` is invalid input, please input a number for {}:",
                line.trim(),
                name
            ),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_quantity_reprompts_until_digits() {
        let mut input = "abc\n-3\n12\n".as_bytes();
        let quantity = prompt_quantity(&mut input, "Croissant").unwrap();
        assert_eq!(quantity, 12);
    }

    #[test]
    fn test_prompt_quantity_eof_defaults_to_zero() {
        let mut input = "".as_bytes();
        assert_eq!(prompt_quantity(&mut input, "Croissant").unwrap(), 0);
    }

    #[test]
    fn test_catalogue_contents() {
        let config = AppConfig {
            debug: false,
            price_decimal_places: 2,
        };
        let bakery = build_catalogue(&config);
        assert_eq!(bakery.products().len(), 3);
        assert_eq!(
            bakery.get_product("CF").unwrap().pack_sizes(),
            vec![9, 5, 3]
        );
    }
}
