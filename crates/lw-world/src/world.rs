//! The world graph: airports, their links, and who contains what.
//!
//! # Invariants
//!
//! - Every name is unique across airports, airplanes and boxes.
//! - A box is owned by at most one container (an airport's ground map or an
//!   airplane's cargo map).  The transfer methods move the value, so a box
//!   can never be in two places.
//! - Airplane occupancy never exceeds `maxbox`; transfers check capacity
//!   before taking the box off the ground.
//! - The goal's clauses are pairwise disjoint (checked by [`World::set_goal`]).
//!
//! Boxes and airplanes that were declared but never placed stay in the flat
//! name index without residing anywhere.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use lw_core::{Airplane, Airport, CargoBox, CoreError, CoreResult, Position};

use crate::{Goal, GoalClause, GoalView, StatusSnapshot, WorldError, WorldResult};

/// Where a box currently rests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoxLocation {
    /// On the ground at an airport.
    Airport(String),
    /// Aboard an airplane parked at `airport`.
    Airplane { airport: String, airplane: String },
}

/// All airports plus a flat index of every box and airplane name.
#[derive(Clone, Debug, Default)]
pub struct World {
    airports:       BTreeMap<String, Airport>,
    box_index:      BTreeSet<String>,
    airplane_index: BTreeSet<String>,
    goal:           Goal,
}

impl World {
    /// An empty world with no entities and an empty goal.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction ──────────────────────────────────────────────────────

    fn name_taken(&self, name: &str) -> bool {
        self.airports.contains_key(name)
            || self.airplane_index.contains(name)
            || self.box_index.contains(name)
    }

    /// Add an airport.  Fails if any entity already uses its name.
    pub fn add_airport(&mut self, airport: Airport) -> WorldResult<()> {
        if self.name_taken(airport.name()) {
            return Err(WorldError::DuplicateName(airport.name().to_owned()));
        }
        self.airports.insert(airport.name().to_owned(), airport);
        Ok(())
    }

    /// Enter a box name into the flat index without placing it.
    pub fn register_box(&mut self, name: impl Into<String>) -> WorldResult<()> {
        let name = name.into();
        if self.name_taken(&name) {
            return Err(WorldError::DuplicateName(name));
        }
        self.box_index.insert(name);
        Ok(())
    }

    /// Enter an airplane name into the flat index without placing it.
    pub fn register_airplane(&mut self, name: impl Into<String>) -> WorldResult<()> {
        let name = name.into();
        if self.name_taken(&name) {
            return Err(WorldError::DuplicateName(name));
        }
        self.airplane_index.insert(name);
        Ok(())
    }

    /// Link `a` and `b` in both directions.  Re-linking overwrites the
    /// previous weight on both endpoints.
    pub fn add_link(&mut self, a: &str, b: &str, weight: u32) -> WorldResult<()> {
        if weight == 0 {
            return Err(WorldError::InvalidWeight { from: a.to_owned(), to: b.to_owned() });
        }
        for name in [a, b] {
            if !self.airports.contains_key(name) {
                return Err(WorldError::UnknownAirport(name.to_owned()));
            }
        }
        if let Some(airport) = self.airports.get_mut(a) {
            airport.add_link(b, weight);
        }
        if let Some(airport) = self.airports.get_mut(b) {
            airport.add_link(a, weight);
        }
        Ok(())
    }

    /// Move `airport` to `position`.
    pub fn set_position(&mut self, airport: &str, position: Position) -> WorldResult<()> {
        self.airport_entry(airport)?.set_position(position);
        Ok(())
    }

    /// Put a registered box on the ground at `airport`.
    pub fn place_box(&mut self, airport: &str, cargo: CargoBox) -> WorldResult<()> {
        if !self.box_index.contains(cargo.name()) {
            return Err(WorldError::BoxAlreadyAssigned(cargo.name().to_owned()));
        }
        self.airport_entry(airport)?.add_box(cargo);
        Ok(())
    }

    /// Park a registered airplane (with whatever it already carries) at
    /// `airport`.
    pub fn place_airplane(&mut self, airport: &str, airplane: Airplane) -> WorldResult<()> {
        if !self.airplane_index.contains(airplane.name()) {
            return Err(WorldError::AirplaneAlreadyAssigned(airplane.name().to_owned()));
        }
        self.airport_entry(airport)?.add_airplane(airplane);
        Ok(())
    }

    /// Install the goal after checking that its clauses are disjoint.
    pub fn set_goal(&mut self, goal: Goal) -> WorldResult<()> {
        goal.verify()?;
        self.goal = goal;
        Ok(())
    }

    fn airport_entry(&mut self, name: &str) -> WorldResult<&mut Airport> {
        self.airports
            .get_mut(name)
            .ok_or_else(|| WorldError::UnknownAirport(name.to_owned()))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn has_airport(&self, name: &str) -> bool {
        self.airports.contains_key(name)
    }

    #[inline]
    pub fn has_airplane(&self, name: &str) -> bool {
        self.airplane_index.contains(name)
    }

    #[inline]
    pub fn has_box(&self, name: &str) -> bool {
        self.box_index.contains(name)
    }

    pub fn airport(&self, name: &str) -> Option<&Airport> {
        self.airports.get(name)
    }

    /// All airports in name order.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> + '_ {
        self.airports.values()
    }

    pub fn box_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.box_index.iter().map(String::as_str)
    }

    pub fn airplane_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.airplane_index.iter().map(String::as_str)
    }

    /// Name of the airport hosting `airplane`.  Linear in the number of
    /// airports.  `None` for unknown or unplaced airplanes.
    pub fn locate_airplane(&self, airplane: &str) -> Option<&str> {
        self.airports
            .values()
            .find(|airport| airport.has_airplane(airplane))
            .map(Airport::name)
    }

    /// The airplane named `name`, wherever it is parked.
    pub fn airplane(&self, name: &str) -> Option<&Airplane> {
        self.airports.values().find_map(|airport| airport.airplane(name))
    }

    /// Where `cargo` currently rests.  `None` for unknown or unplaced boxes.
    pub fn locate_box(&self, cargo: &str) -> Option<BoxLocation> {
        self.airports.values().find_map(|airport| {
            if airport.has_box(cargo) {
                return Some(BoxLocation::Airport(airport.name().to_owned()));
            }
            airport
                .airplanes()
                .find(|plane| plane.contains(cargo))
                .map(|plane| BoxLocation::Airplane {
                    airport:  airport.name().to_owned(),
                    airplane: plane.name().to_owned(),
                })
        })
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    // ── Projections ───────────────────────────────────────────────────────

    /// Deep, owned snapshot of every airport.
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot::capture(self.airports.values())
    }

    /// Owned location → objects projection of the goal.
    pub fn goal_view(&self) -> GoalView {
        self.goal.view()
    }

    /// `true` when every goal clause holds.
    pub fn check_goal(&self) -> bool {
        self.goal.clauses().iter().all(|clause| self.clause_holds(clause))
    }

    /// `true` when every object of `clause` resides at its location.
    ///
    /// A location that is neither an airport nor a placed airplane holds
    /// nothing, so such a clause only holds when it names no objects.  It is
    /// not skipped: a goal naming a missing location stays unsatisfied.
    pub fn clause_holds(&self, clause: &GoalClause) -> bool {
        let location = clause.location();
        let objects = clause.objects();
        if let Some(airport) = self.airports.get(location) {
            objects.iter().all(|name| airport.contains(name))
        } else if let Some(airplane) = self.airplane(location) {
            objects.iter().all(|name| airplane.contains(name))
        } else {
            objects.is_empty()
        }
    }

    // ── Transfers ─────────────────────────────────────────────────────────

    fn host_mut(&mut self, airplane: &str) -> Option<&mut Airport> {
        self.airports
            .values_mut()
            .find(|airport| airport.has_airplane(airplane))
    }

    /// Move `cargo` from the ground into `airplane`, if both are at the same
    /// airport.
    ///
    /// Returns `Ok(false)` when the airplane is unplaced or the box is not on
    /// the ground at the airplane's airport.  A full airplane is an error and
    /// leaves the box where it was.
    pub fn board(&mut self, cargo: &str, airplane: &str) -> CoreResult<bool> {
        let Some(airport) = self.host_mut(airplane) else {
            return Ok(false);
        };
        if !airport.has_box(cargo) {
            return Ok(false);
        }
        if let Some(plane) = airport.airplane(airplane).filter(|p| p.is_full()) {
            return Err(CoreError::CapacityExceeded {
                airplane: plane.name().to_owned(),
                maxbox:   plane.maxbox(),
            });
        }
        let Some(item) = airport.remove_box(cargo) else {
            return Ok(false);
        };
        match airport.airplane_mut(airplane) {
            Some(plane) => plane.add_box(item).map(|()| true),
            None => {
                airport.add_box(item);
                Ok(false)
            }
        }
    }

    /// Move `cargo` out of `airplane` onto the ground of its airport.
    ///
    /// Returns `false` when the airplane is unplaced or the box is not aboard.
    pub fn unboard(&mut self, cargo: &str, airplane: &str) -> bool {
        let Some(airport) = self.host_mut(airplane) else {
            return false;
        };
        let Some(item) = airport
            .airplane_mut(airplane)
            .and_then(|plane| plane.remove_box(cargo))
        else {
            return false;
        };
        airport.add_box(item);
        true
    }

    /// Move `airplane`, with its cargo, from airport `from` to airport `to`.
    ///
    /// Link existence is not checked here.  Returns `false` when either
    /// airport is unknown or the airplane is not parked at `from`.
    pub fn relocate_airplane(&mut self, airplane: &str, from: &str, to: &str) -> bool {
        if !self.airports.contains_key(to) {
            return false;
        }
        let Some(plane) = self
            .airports
            .get_mut(from)
            .and_then(|airport| airport.remove_airplane(airplane))
        else {
            return false;
        };
        if let Some(destination) = self.airports.get_mut(to) {
            destination.add_airplane(plane);
        }
        true
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Environment -------")?;
        for airport in self.airports.values() {
            writeln!(f, "{airport}")?;
        }
        f.write_str("-------------------------")
    }
}
