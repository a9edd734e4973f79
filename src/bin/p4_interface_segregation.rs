//! Pattern 4: Interface Segregation
//!
//! Run with: cargo run --bin p4_interface_segregation

use colored::Colorize;
use solid_patterns::solid::interface_segregation::{
    Document, Machine, MultiFunctionDevice, MultiFunctionPrinter, OldFashionedPrinter, OnlyPrinter,
    Photocopier, PhotocopierMachine, Printer,
};

fn main() -> solid_patterns::Result<()> {
    solid_patterns::init()?;
    let doc = Document::new("invoice.pdf");

    println!("{}", "=== One fat Machine trait ===".bold().cyan());
    let machines: Vec<Box<dyn Machine>> = vec![Box::new(MultiFunctionPrinter), Box::new(OldFashionedPrinter)];
    for machine in &machines {
        println!("{}", machine.print(&doc)?);
        match machine.fax(&doc) {
            Ok(job) => println!("{}", job),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }

    println!("\n{}", "=== Segregated traits ===".bold().cyan());
    println!("{}", OnlyPrinter.print(&doc));
    for job in Photocopier.copy(&doc) {
        println!("{}", job);
    }

    println!("\n{}", "=== Decorator ===".bold().cyan());
    let machine = PhotocopierMachine::new(OnlyPrinter, Photocopier);
    for job in machine.copy(&doc) {
        println!("{}", job);
    }

    Ok(())
}
