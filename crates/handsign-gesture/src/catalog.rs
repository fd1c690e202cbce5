//! Gesture catalog: named hand-shape predicates evaluated once per frame.
//!
//! The catalog is fixed once built. Gestures are addressed by [`GestureId`],
//! an index into the catalog, so evidence can only ever be recorded for
//! gestures that exist.

use std::collections::HashSet;
use std::fmt;

use handsign_core::LandmarkFrame;
use crate::error::CatalogError;
use crate::{letters, words};

/// Decides whether a frame shows one particular hand shape.
///
/// Implementations must be pure: same frame, same answer, no side effects.
pub trait GesturePredicate: Send + Sync {
    fn evaluate(&self, frame: &LandmarkFrame) -> bool;
}

impl<F> GesturePredicate for F
where
    F: Fn(&LandmarkFrame) -> bool + Send + Sync,
{
    fn evaluate(&self, frame: &LandmarkFrame) -> bool {
        self(frame)
    }
}

/// Position of a gesture within its catalog.
///
/// Only a catalog hands these out; there is no public constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GestureId(usize);

impl GestureId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One catalog entry.
pub struct GestureDefinition {
    name: String,
    description: String,
    predicate: Box<dyn GesturePredicate>,
}

impl GestureDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        predicate: impl GesturePredicate + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn matches(&self, frame: &LandmarkFrame) -> bool {
        self.predicate.evaluate(frame)
    }
}

impl fmt::Debug for GestureDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Which gestures fired for one frame, one flag per catalog entry.
///
/// Only a catalog can produce these, so the length always matches it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detections {
    fired: Vec<bool>,
}

impl Detections {
    pub fn is_fired(&self, id: GestureId) -> bool {
        self.fired.get(id.0).copied().unwrap_or(false)
    }

    pub fn any(&self) -> bool {
        self.fired.iter().any(|&f| f)
    }

    pub fn fired_ids(&self) -> impl Iterator<Item = GestureId> + '_ {
        self.fired
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f)
            .map(|(i, _)| GestureId(i))
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}

/// Immutable, ordered set of gesture definitions with unique names.
#[derive(Debug)]
pub struct GestureCatalog {
    definitions: Vec<GestureDefinition>,
}

impl GestureCatalog {
    /// The full vocabulary: greeting words, then the letters A to Z.
    pub fn builtin() -> Self {
        let mut definitions = words::definitions();
        definitions.extend(letters::definitions());
        Self { definitions }
    }

    /// Start an injectable catalog, typically for tests.
    pub fn builder() -> GestureCatalogBuilder {
        GestureCatalogBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = GestureId> {
        (0..self.definitions.len()).map(GestureId)
    }

    pub fn get(&self, id: GestureId) -> Option<&GestureDefinition> {
        self.definitions.get(id.0)
    }

    pub fn name(&self, id: GestureId) -> Option<&str> {
        self.get(id).map(GestureDefinition::name)
    }

    pub fn lookup(&self, name: &str) -> Option<GestureId> {
        self.definitions
            .iter()
            .position(|d| d.name == name)
            .map(GestureId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GestureId, &GestureDefinition)> {
        self.definitions
            .iter()
            .enumerate()
            .map(|(i, d)| (GestureId(i), d))
    }

    /// Run every predicate against `frame`. Gestures are independent, so
    /// several may fire at once. A frame with non-finite coordinates fires
    /// nothing.
    pub fn evaluate(&self, frame: &LandmarkFrame) -> Detections {
        if !frame.is_finite() {
            return self.no_hand();
        }
        Detections {
            fired: self.definitions.iter().map(|d| d.matches(frame)).collect(),
        }
    }

    /// Detections for a frame with no hand: nothing fired.
    pub fn no_hand(&self) -> Detections {
        Detections {
            fired: vec![false; self.definitions.len()],
        }
    }

    /// Names of the gestures that fired, in catalog order.
    pub fn fired_names<'a>(&'a self, detections: &'a Detections) -> Vec<&'a str> {
        detections
            .fired_ids()
            .filter_map(|id| self.name(id))
            .collect()
    }
}

/// Collects definitions and checks names on [`build`](Self::build).
#[derive(Default)]
pub struct GestureCatalogBuilder {
    definitions: Vec<GestureDefinition>,
}

impl GestureCatalogBuilder {
    pub fn gesture(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        predicate: impl GesturePredicate + 'static,
    ) -> Self {
        self.definitions
            .push(GestureDefinition::new(name, description, predicate));
        self
    }

    pub fn definition(mut self, definition: GestureDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    pub fn build(self) -> Result<GestureCatalog, CatalogError> {
        if self.definitions.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for def in &self.definitions {
            if def.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !seen.insert(def.name.as_str()) {
                return Err(CatalogError::DuplicateName(def.name.clone()));
            }
        }
        Ok(GestureCatalog {
            definitions: self.definitions,
        })
    }
}
