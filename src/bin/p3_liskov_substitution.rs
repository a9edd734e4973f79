//! Pattern 3: Liskov Substitution
//!
//! Run with: cargo run --bin p3_liskov_substitution

use colored::Colorize;
use solid_patterns::solid::liskov_substitution::{use_it, AreaReport, Rectangle, Shape, Square};

fn show(label: &str, report: AreaReport) {
    let verdict = if report.holds() {
        "holds".green()
    } else {
        "broken".red()
    };
    println!(
        "{}: expected {}, actual {} ({})",
        label, report.expected, report.actual, verdict
    );
}

fn main() -> solid_patterns::Result<()> {
    solid_patterns::init()?;

    println!("{}", "=== Rectangle ===".bold().cyan());
    let mut rectangle = Rectangle::new(2, 3);
    show("rectangle 2x3", use_it(&mut rectangle));

    println!("\n{}", "=== Square passed as a Shape ===".bold().cyan());
    let mut square = Square::new(5);
    show("square 5", use_it(&mut square));
    println!("square is now {}x{}", square.width(), square.height());

    println!("\n{}", "=== Asking instead of subtyping ===".bold().cyan());
    for rectangle in [Rectangle::new(4, 4), Rectangle::new(4, 5)] {
        println!("{:?} is square: {}", rectangle, rectangle.is_square());
    }

    Ok(())
}
