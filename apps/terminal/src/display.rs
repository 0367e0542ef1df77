//! Receipt and catalogue printing.
//!
//! Column layout matches the store receipt: a 20-character label column
//! followed by the value.

use bakery_core::{Bakery, BakeryResult, Order, Product};

/// Prints one catalogue entry: name, code, and the pack price list.
pub fn print_product(product: &Product) {
    println!("{:<20} {}", "Name:", product.name());
    println!("{:<20} {}", "Code:", product.code());
    for (index, (size, price)) in product.packs().iter().enumerate() {
        let title = if index == 0 { "Pack Size:" } else { "" };
        println!("{:<20} {}: ${}", title, size, price);
    }
    println!("{}", "-".repeat(40));
}

/// Echoes the requested quantities back, one line per product.
pub fn print_order(order: &Order, bakery: &Bakery) -> BakeryResult<()> {
    for (code, line) in order.lines() {
        let name = bakery.get_product(code)?.name();
        println!("{:<20} {}", format!("{}:", name), line.quantity);
    }
    Ok(())
}

/// Prints the full processed order, one block per line.
pub fn print_result(order: &Order, bakery: &Bakery) -> BakeryResult<()> {
    for (code, line) in order.lines() {
        let product = bakery.get_product(code)?;

        println!("{:<20} {:?}", format!("{}:", product.name()), product.pack_sizes());
        println!("{:<20} {}", "Pack breakdown:", line.quantity);

        if line.packs.is_empty() {
            println!("{:<10} Non pack matches", "");
        } else {
            for (&size, &count) in line.packs.iter().rev() {
                let price = product.pack_price(size)?;
                println!(
                    "{:<2} {:<17} {:<12} ${} X {}",
                    "",
                    format!("Pack of {} X {}", size, count),
                    size * count,
                    price,
                    count
                );
            }
        }

        match line.remainder {
            Some(remainder) => println!("{:<20} {}", "Remainder:", remainder),
            None => println!("{:<20} (not processed)", "Remainder:"),
        }
        match line.total_price {
            Some(total) => println!("{:<20} {:<12} ${}", "Total Price:", "", total),
            None => println!("{:<20} {:<12} (not processed)", "Total Price:", ""),
        }
        println!("{}", "-".repeat(50));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bakery_core::Quantizer;

    fn sample_bakery() -> Bakery {
        let quantizer = Quantizer::default();
        let vs = Product::new(
            "Vegemite Scroll",
            "VS5",
            &[("3", "6.99"), ("5", "8.99")],
            &quantizer,
        );
        Bakery::new(vec![vs])
    }

    #[test]
    fn test_print_order_echoes_known_codes() {
        let bakery = sample_bakery();
        let order = Order::new([("VS5".to_string(), 10)]);
        assert!(print_order(&order, &bakery).is_ok());
    }

    #[test]
    fn test_print_order_errors_on_code_missing_from_catalogue() {
        let bakery = sample_bakery();
        let order = Order::new([("WRONG_CODE".to_string(), 10)]);
        assert!(print_order(&order, &bakery).is_err());
    }
}
