//! Pattern 2: Open/Closed
//!
//! Run with: cargo run --bin p2_open_closed

use colored::Colorize;
use solid_patterns::solid::open_closed::{
    BetterFilter, Color, ColorSpecification, Filter, Product, Size, SizeSpecification, Specification,
};

fn print_products(products: &[&Product]) {
    for product in products {
        println!(" - {}", product.name);
    }
}

fn main() -> solid_patterns::Result<()> {
    solid_patterns::init()?;

    let products = vec![
        Product::new("apple", Color::Red, Size::Small),
        Product::new("car", Color::Green, Size::Large),
        Product::new("small car", Color::Green, Size::Small),
    ];

    println!("{}", "=== Hard-coded filter: only red products ===".bold().cyan());
    print_products(&Filter.filter_by_color(&products, Color::Red));

    println!("\n{}", "=== Specification: only red products ===".bold().cyan());
    let red = ColorSpecification::new(Color::Red);
    print_products(&BetterFilter.filter(&products, &red));

    println!("\n{}", "=== Specification: small and green products ===".bold().cyan());
    let small_green = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Small));
    print_products(&BetterFilter.filter(&products, &small_green));

    println!("\n{}", "=== New criterion, no filter changes ===".bold().cyan());
    let long_name = |p: &Product| p.name.contains(' ');
    print_products(&BetterFilter.filter(&products, &long_name));

    Ok(())
}
