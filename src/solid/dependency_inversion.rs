//! Pattern 5: Dependency Inversion
//!
//! High-level modules should not depend on low-level modules; both should
//! depend on abstractions. `Research` reads the storage layout of
//! `Relationships` directly, `ResearchNew` only sees a `RelationshipBrowser`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// `from` is `relationship` of `to`, e.g. Jim is Parent of Anna.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Info {
    pub from: Person,
    pub relationship: Relationship,
    pub to: Person,
}

// Low-level module: storage
#[derive(Debug, Default)]
pub struct Relationships {
    relations: Vec<Info>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the parent edge and its inverse child edge.
    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        tracing::debug!(parent = %parent, child = %child, "recording parent/child");
        self.relations.push(Info {
            from: parent.clone(),
            relationship: Relationship::Parent,
            to: child.clone(),
        });
        self.relations.push(Info {
            from: child.clone(),
            relationship: Relationship::Child,
            to: parent.clone(),
        });
    }

    pub fn add_siblings(&mut self, first: &Person, second: &Person) {
        tracing::debug!(first = %first, second = %second, "recording siblings");
        self.relations.push(Info {
            from: first.clone(),
            relationship: Relationship::Sibling,
            to: second.clone(),
        });
        self.relations.push(Info {
            from: second.clone(),
            relationship: Relationship::Sibling,
            to: first.clone(),
        });
    }

    pub fn relations(&self) -> &[Info] {
        &self.relations
    }
}

// High-level module that breaks DIP: it knows relations are a Vec<Info>.
pub struct Research<'a> {
    relationships: &'a Relationships,
}

impl<'a> Research<'a> {
    pub fn new(relationships: &'a Relationships) -> Self {
        Self { relationships }
    }

    pub fn investigate(&self, name: &str) -> Vec<String> {
        self.relationships
            .relations()
            .iter()
            .filter(|rel| rel.from.name == name && rel.relationship == Relationship::Parent)
            .map(|rel| format!("{}'s child is {}", name, rel.to))
            .collect()
    }
}

// =============================================================================
// The abstraction both sides depend on
// =============================================================================

pub trait RelationshipBrowser {
    fn find_all_children_of(&self, name: &str) -> Vec<&Person>;
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of(&self, name: &str) -> Vec<&Person> {
        self.relations
            .iter()
            .filter(|rel| rel.relationship == Relationship::Parent && rel.from.name == name)
            .map(|rel| &rel.to)
            .collect()
    }
}

impl<B: RelationshipBrowser + ?Sized> RelationshipBrowser for &B {
    fn find_all_children_of(&self, name: &str) -> Vec<&Person> {
        (**self).find_all_children_of(name)
    }
}

pub struct ResearchNew<B: RelationshipBrowser> {
    browser: B,
}

impl<B: RelationshipBrowser> ResearchNew<B> {
    pub fn new(browser: B) -> Self {
        Self { browser }
    }

    pub fn investigate(&self, name: &str) -> Vec<String> {
        let children = self.browser.find_all_children_of(name);
        tracing::info!(name, children = children.len(), "investigated");
        children
            .into_iter()
            .map(|child| format!("{}'s child is {}", name, child))
            .collect()
    }
}
