//! # SOLID Principles & the Builder Pattern
//!
//! One runnable demo per principle, each built on its own toy domain.
//!
//! ## Pattern 1: Single Responsibility
//! - A journal that only manages its entries
//! - Persistence kept in a separate module
//!
//! ## Pattern 2: Open/Closed
//! - Hard-coded filter methods (the problem)
//! - Composable specifications (the fix)
//!
//! ## Pattern 3: Liskov Substitution
//! - Rectangle and square behind one `Shape` trait
//! - A caller whose expectation the square breaks
//!
//! ## Pattern 4: Interface Segregation
//! - One fat `Machine` trait versus small capability traits
//! - Supertrait composition and a delegating decorator
//!
//! ## Pattern 5: Dependency Inversion
//! - Research that reaches into a concrete store
//! - Research that depends on a `RelationshipBrowser` abstraction
//!
//! ## Pattern 6: Builder
//! - Incremental string construction
//! - A reusable HTML element builder
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_single_responsibility
//! cargo run --bin p2_open_closed
//! cargo run --bin p3_liskov_substitution
//! cargo run --bin p4_interface_segregation
//! cargo run --bin p5_dependency_inversion
//! cargo run --bin p6_html_builder
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod solid;
pub mod telemetry;

pub use config::DemoConfig;
pub use error::{Error, Result};

/// Loads the demo configuration, installs logging and applies console
/// settings. Every demo binary calls this first.
pub fn init() -> Result<DemoConfig> {
    let config = DemoConfig::load()?;
    telemetry::init(&config.logging, &config.output)?;
    config.output.apply();
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
