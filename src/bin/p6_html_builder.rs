//! Pattern 6: Builder
//!
//! Run with: cargo run --bin p6_html_builder

use colored::Colorize;
use solid_patterns::builder::{wrap, HtmlElement};

fn main() -> solid_patterns::Result<()> {
    let config = solid_patterns::init()?;

    println!("{}", "=== Wrapping text ===".bold().cyan());
    println!("{}", wrap("p", "hello"));

    println!("\n{}", "=== HtmlBuilder ===".bold().cyan());
    let mut builder = HtmlElement::builder("ul");
    builder.add_child("li", "hello").add_child("li", "world");
    println!("{}", builder.build().render(config.html.indent));

    println!("\n{}", "=== Reusing the builder ===".bold().cyan());
    builder.clear();
    builder.add_child("li", "fish & chips");
    println!("{}", builder.build().render(config.html.indent));

    Ok(())
}
