//! Pattern 2: Open/Closed
//!
//! Open for extension, closed for modification. `Filter` needs a new
//! method for every criterion; `BetterFilter` never changes because new
//! criteria arrive as new `Specification` implementations.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.size, self.color)
    }
}

// =============================================================================
// Before: one method per criterion
// =============================================================================

/// Adding "filter by weight" means editing this type again.
pub struct Filter;

impl Filter {
    pub fn filter_by_color<'a>(&self, products: &'a [Product], color: Color) -> Vec<&'a Product> {
        products.iter().filter(|p| p.color == color).collect()
    }

    pub fn filter_by_size<'a>(&self, products: &'a [Product], size: Size) -> Vec<&'a Product> {
        products.iter().filter(|p| p.size == size).collect()
    }

    pub fn filter_by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| p.size == size && p.color == color)
            .collect()
    }
}

// =============================================================================
// After: specifications
// =============================================================================

pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;

    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        AndSpecification::new(self, other)
    }

    fn or<S>(self, other: S) -> OrSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        OrSpecification::new(self, other)
    }

    fn not(self) -> NotSpecification<Self>
    where
        Self: Sized,
    {
        NotSpecification::new(self)
    }
}

// Any predicate closure is already a specification.
impl<T, F> Specification<T> for F
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self(item)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ColorSpecification {
    pub color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SizeSpecification {
    pub size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for OrSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NotSpecification<A> {
    inner: A,
}

impl<A> NotSpecification<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<T, A> Specification<T> for NotSpecification<A>
where
    A: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }
}

/// Works for any item type and any specification, present or future.
pub struct BetterFilter;

impl BetterFilter {
    pub fn filter<'a, T, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized,
    {
        let matched: Vec<&T> = items.iter().filter(|item| spec.is_satisfied(item)).collect();
        tracing::debug!(total = items.len(), matched = matched.len(), "filtered items");
        matched
    }
}
