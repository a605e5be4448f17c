//! Owned snapshots of world state for agents.
//!
//! A [`StatusSnapshot`] shares nothing with the live world: every name, weight
//! and position is copied.  Agents receive it by value and may mutate it
//! freely.

use std::collections::BTreeMap;

use lw_core::{Airplane, Airport, Position};
use serde::Serialize;

/// Capacity and cargo of one airplane.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AirplaneStatus {
    pub maxbox: usize,
    pub boxes:  Vec<String>,
}

/// Everything an agent may observe about one airport.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AirportStatus {
    pub position:  Position,
    pub neighbors: BTreeMap<String, u32>,
    pub boxes:     Vec<String>,
    pub airplanes: BTreeMap<String, AirplaneStatus>,
}

/// Per-airport projection of the whole world, keyed by airport name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatusSnapshot {
    pub airports: BTreeMap<String, AirportStatus>,
}

impl StatusSnapshot {
    pub(crate) fn capture<'a>(airports: impl Iterator<Item = &'a Airport>) -> Self {
        let airports = airports
            .map(|airport| (airport.name().to_owned(), AirportStatus::capture(airport)))
            .collect();
        Self { airports }
    }

    pub fn airport(&self, name: &str) -> Option<&AirportStatus> {
        self.airports.get(name)
    }

    /// Name of the airport an airplane is parked at.
    pub fn airplane_location(&self, airplane: &str) -> Option<&str> {
        self.airports
            .iter()
            .find(|(_, status)| status.airplanes.contains_key(airplane))
            .map(|(name, _)| name.as_str())
    }
}

impl AirportStatus {
    fn capture(airport: &Airport) -> Self {
        Self {
            position:  airport.position(),
            neighbors: airport.neighbors().clone(),
            boxes:     airport.box_names().map(str::to_owned).collect(),
            airplanes: airport
                .airplanes()
                .map(|plane| (plane.name().to_owned(), AirplaneStatus::capture(plane)))
                .collect(),
        }
    }
}

impl AirplaneStatus {
    fn capture(airplane: &Airplane) -> Self {
        Self {
            maxbox: airplane.maxbox(),
            boxes:  airplane.box_names().map(str::to_owned).collect(),
        }
    }
}
