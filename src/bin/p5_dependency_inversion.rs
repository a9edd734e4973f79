//! Pattern 5: Dependency Inversion
//!
//! Run with: cargo run --bin p5_dependency_inversion

use colored::Colorize;
use solid_patterns::solid::dependency_inversion::{Person, Relationships, Research, ResearchNew};

fn main() -> solid_patterns::Result<()> {
    solid_patterns::init()?;

    let parent = Person::new("Jim");
    let child1 = Person::new("A");
    let child2 = Person::new("B");

    // low-level module
    let mut relationships = Relationships::new();
    relationships.add_parent_and_child(&parent, &child1);
    relationships.add_parent_and_child(&parent, &child2);
    relationships.add_siblings(&child1, &child2);

    println!("{}", "=== Research on the concrete store ===".bold().cyan());
    for line in Research::new(&relationships).investigate("Jim") {
        println!("{}", line);
    }

    println!("\n{}", "=== Research on a RelationshipBrowser ===".bold().cyan());
    let research = ResearchNew::new(&relationships);
    for line in research.investigate("Jim") {
        println!("{}", line);
    }

    Ok(())
}
