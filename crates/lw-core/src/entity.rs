//! The nouns of the world: boxes, airplanes, and airports.
//!
//! Containment is expressed through ownership.  A [`CargoBox`] value lives in
//! exactly one map (an airport's or an airplane's) and is *moved* between
//! them on load/unload.  An [`Airplane`] likewise lives in exactly one
//! airport's map; its location is never stored on the airplane itself.
//!
//! Every map is a `BTreeMap` keyed by name so iteration (snapshots, display)
//! is deterministic.

use std::collections::BTreeMap;
use std::fmt;

use crate::{CoreError, CoreResult, Position};

/// Capacity given to airplanes whose configuration does not set `maxbox`.
pub const DEFAULT_MAXBOX: usize = 10;

// ── CargoBox ──────────────────────────────────────────────────────────────────

/// A box: identity only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CargoBox {
    name: String,
}

impl CargoBox {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for CargoBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ── Airplane ──────────────────────────────────────────────────────────────────

/// A capacity-bounded mobile container of boxes.
#[derive(Clone, Debug, PartialEq)]
pub struct Airplane {
    name:   String,
    maxbox: usize,
    boxes:  BTreeMap<String, CargoBox>,
}

impl Airplane {
    pub fn new(name: impl Into<String>, maxbox: usize) -> Self {
        Self { name: name.into(), maxbox, boxes: BTreeMap::new() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn maxbox(&self) -> usize {
        self.maxbox
    }

    /// Change the capacity.  Only the loader calls this, before any box is
    /// placed aboard.
    pub fn set_maxbox(&mut self, maxbox: usize) {
        self.maxbox = maxbox;
    }

    /// Number of boxes aboard.
    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// `true` when no further box can be added.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.boxes.len() >= self.maxbox
    }

    /// `true` if a box named `name` is aboard.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.boxes.contains_key(name)
    }

    /// Names of the boxes aboard, in name order.
    pub fn box_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.boxes.keys().map(String::as_str)
    }

    /// Put `cargo` aboard.
    ///
    /// Fails with [`CoreError::CapacityExceeded`] when the airplane is already
    /// full; the box is dropped in that case, so callers that must keep it
    /// check [`is_full`](Self::is_full) first.
    pub fn add_box(&mut self, cargo: CargoBox) -> CoreResult<()> {
        if self.is_full() {
            return Err(CoreError::CapacityExceeded {
                airplane: self.name.clone(),
                maxbox:   self.maxbox,
            });
        }
        self.boxes.insert(cargo.name.clone(), cargo);
        Ok(())
    }

    /// Take the box named `name` off the airplane.
    pub fn remove_box(&mut self, name: &str) -> Option<CargoBox> {
        self.boxes.remove(name)
    }
}

impl fmt::Display for Airplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with {}/{} boxes: [", self.name, self.boxes.len(), self.maxbox)?;
        for (i, name) in self.boxes.keys().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("]")
    }
}

// ── Airport ───────────────────────────────────────────────────────────────────

/// A stationary node: position, weighted neighbor links, resident boxes and
/// resident airplanes.
#[derive(Clone, Debug, PartialEq)]
pub struct Airport {
    name:      String,
    position:  Position,
    neighbors: BTreeMap<String, u32>,
    boxes:     BTreeMap<String, CargoBox>,
    airplanes: BTreeMap<String, Airplane>,
}

impl Airport {
    /// Create an empty airport at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:      name.into(),
            position:  Position::ORIGIN,
            neighbors: BTreeMap::new(),
            boxes:     BTreeMap::new(),
            airplanes: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    // ── Links ─────────────────────────────────────────────────────────────

    /// Record a one-directional link to `neighbor`, overwriting any previous
    /// weight.  The world installs the reverse direction.
    pub fn add_link(&mut self, neighbor: impl Into<String>, weight: u32) {
        self.neighbors.insert(neighbor.into(), weight);
    }

    /// Weight of the link to `neighbor`, if one exists.
    #[inline]
    pub fn weight_to(&self, neighbor: &str) -> Option<u32> {
        self.neighbors.get(neighbor).copied()
    }

    pub fn neighbors(&self) -> &BTreeMap<String, u32> {
        &self.neighbors
    }

    // ── Boxes ─────────────────────────────────────────────────────────────

    pub fn add_box(&mut self, cargo: CargoBox) {
        self.boxes.insert(cargo.name().to_owned(), cargo);
    }

    pub fn remove_box(&mut self, name: &str) -> Option<CargoBox> {
        self.boxes.remove(name)
    }

    /// `true` if the box named `name` rests on the ground here.
    #[inline]
    pub fn has_box(&self, name: &str) -> bool {
        self.boxes.contains_key(name)
    }

    pub fn box_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.boxes.keys().map(String::as_str)
    }

    // ── Airplanes ─────────────────────────────────────────────────────────

    pub fn add_airplane(&mut self, airplane: Airplane) {
        self.airplanes.insert(airplane.name().to_owned(), airplane);
    }

    pub fn remove_airplane(&mut self, name: &str) -> Option<Airplane> {
        self.airplanes.remove(name)
    }

    #[inline]
    pub fn has_airplane(&self, name: &str) -> bool {
        self.airplanes.contains_key(name)
    }

    pub fn airplane(&self, name: &str) -> Option<&Airplane> {
        self.airplanes.get(name)
    }

    pub fn airplane_mut(&mut self, name: &str) -> Option<&mut Airplane> {
        self.airplanes.get_mut(name)
    }

    pub fn airplanes(&self) -> impl Iterator<Item = &Airplane> + '_ {
        self.airplanes.values()
    }

    /// Membership by name: a resident box or a resident airplane.
    ///
    /// Boxes aboard a resident airplane do not count.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.has_box(name) || self.has_airplane(name)
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at {} {{", self.name, self.position)?;
        writeln!(f, "\tboxes:")?;
        for name in self.boxes.keys() {
            writeln!(f, "\t\t- {name}")?;
        }
        writeln!(f, "\tairplanes:")?;
        for airplane in self.airplanes.values() {
            writeln!(f, "\t\t- {airplane}")?;
        }
        writeln!(f, "\tneighbors:")?;
        for (name, weight) in &self.neighbors {
            writeln!(f, "\t\t- {name} -> {weight}")?;
        }
        f.write_str("}")
    }
}
