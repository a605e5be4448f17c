//! Build a validated [`World`] from a configuration document.
//!
//! Loading runs in a fixed order and stops at the first error:
//!
//! 1. Create airports, airplanes and boxes.  Airplanes and boxes wait in a
//!    pending pool.
//! 2. Install edges symmetrically.  Unknown endpoints fail.
//! 3. Apply vertices: positions, ground boxes, then airplanes with their
//!    cargo.  Each box and airplane may leave the pending pool once; a second
//!    request (or an unknown name) fails.
//! 4. Parse goal clauses in input order.
//! 5. Reject goals whose clauses share an object.
//!
//! Edges and vertices are applied in document order.  Anything still pending
//! after step 3 stays unplaced.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use lw_core::{Airplane, Airport, CargoBox, DEFAULT_MAXBOX, EntityKind, NameGenerator, Position};
use tracing::{debug, info};

use crate::config::{InitialStatus, Population, VertexConfig, WorldConfig};
use crate::{Goal, World, WorldError, WorldResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a world from a JSON file with a fresh [`WorldLoader`].
pub fn load_world_json(path: &Path) -> WorldResult<World> {
    WorldLoader::new().load_path(path)
}

/// Load a world from JSON text with a fresh [`WorldLoader`].
pub fn load_world_str(text: &str) -> WorldResult<World> {
    WorldLoader::new().load_str(text)
}

/// Turns configuration documents into worlds.
///
/// The loader owns the [`NameGenerator`] used for count-based populations, so
/// every world built by the same loader gets fresh auto-generated names.
#[derive(Debug, Default)]
pub struct WorldLoader {
    names: NameGenerator,
}

impl WorldLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue numbering from an existing generator.
    pub fn with_names(names: NameGenerator) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &NameGenerator {
        &self.names
    }

    pub fn load_path(&mut self, path: &Path) -> WorldResult<World> {
        let file = File::open(path)?;
        debug!(path = %path.display(), "loading world configuration");
        self.load_reader(BufReader::new(file))
    }

    /// Like [`load_path`](Self::load_path) but accepts any `Read` source.
    pub fn load_reader<R: Read>(&mut self, reader: R) -> WorldResult<World> {
        let config: WorldConfig = serde_json::from_reader(reader)?;
        self.build(&config)
    }

    pub fn load_str(&mut self, text: &str) -> WorldResult<World> {
        let config: WorldConfig = serde_json::from_str(text)?;
        self.build(&config)
    }

    /// Validate `config` and build the world it describes.
    pub fn build(&mut self, config: &WorldConfig) -> WorldResult<World> {
        let status = &config.initial_status;
        let mut world = World::new();

        // ── Step 1: instantiate entities ──────────────────────────────────
        let mut pending = self.instantiate(status, &mut world)?;

        // ── Step 2: edges ─────────────────────────────────────────────────
        for (airport, neighbors) in &status.edges {
            if !world.has_airport(airport) {
                return Err(WorldError::UnknownAirport(airport.clone()));
            }
            for (neighbor, &weight) in neighbors {
                world.add_link(airport, neighbor, weight)?;
            }
        }

        // ── Step 3: vertices ──────────────────────────────────────────────
        for (airport, vertex) in &status.vertices {
            apply_vertex(&mut world, &mut pending, airport, vertex)?;
        }
        if !pending.boxes.is_empty() || !pending.airplanes.is_empty() {
            debug!(
                boxes     = pending.boxes.len(),
                airplanes = pending.airplanes.len(),
                "entities left unplaced"
            );
        }

        // ── Steps 4–5: goal ───────────────────────────────────────────────
        let goal = Goal::parse_all(&config.goal)?;
        world.set_goal(goal)?;

        info!(
            airports  = world.airports().count(),
            airplanes = world.airplane_names().count(),
            boxes     = world.box_names().count(),
            clauses   = world.goal().clauses().len(),
            "world loaded"
        );
        Ok(world)
    }

    fn instantiate(&mut self, status: &InitialStatus, world: &mut World) -> WorldResult<Pending> {
        let mut pending = Pending::default();

        for name in self.population(&status.airports, EntityKind::Airport) {
            world.add_airport(Airport::new(name))?;
        }
        for name in self.population(&status.airplanes, EntityKind::Airplane) {
            world.register_airplane(name.clone())?;
            pending.airplanes.insert(name.clone(), Airplane::new(name, DEFAULT_MAXBOX));
        }
        for name in self.population(&status.boxes, EntityKind::Box) {
            world.register_box(name.clone())?;
            pending.boxes.insert(name.clone(), CargoBox::new(name));
        }
        Ok(pending)
    }

    fn population(&mut self, population: &Population, kind: EntityKind) -> Vec<String> {
        match population {
            Population::Count(n) => (0..*n).map(|_| self.names.next(kind)).collect(),
            Population::Names(names) => names.clone(),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Declared entities not yet placed anywhere.
#[derive(Default)]
struct Pending {
    airplanes: BTreeMap<String, Airplane>,
    boxes:     BTreeMap<String, CargoBox>,
}

impl Pending {
    fn take_box(&mut self, name: &str) -> WorldResult<CargoBox> {
        self.boxes
            .remove(name)
            .ok_or_else(|| WorldError::BoxAlreadyAssigned(name.to_owned()))
    }

    fn take_airplane(&mut self, name: &str) -> WorldResult<Airplane> {
        self.airplanes
            .remove(name)
            .ok_or_else(|| WorldError::AirplaneAlreadyAssigned(name.to_owned()))
    }
}

fn apply_vertex(
    world:   &mut World,
    pending: &mut Pending,
    airport: &str,
    vertex:  &VertexConfig,
) -> WorldResult<()> {
    if !world.has_airport(airport) {
        return Err(WorldError::UnknownAirport(airport.to_owned()));
    }
    if let Some(position) = vertex.position {
        world.set_position(airport, Position::from(position))?;
    }
    for name in &vertex.boxes {
        let cargo = pending.take_box(name)?;
        world.place_box(airport, cargo)?;
    }
    for (name, plane_config) in &vertex.airplanes {
        let mut plane = pending.take_airplane(name)?;
        plane.set_maxbox(plane_config.maxbox);
        for box_name in &plane_config.boxes {
            plane.add_box(pending.take_box(box_name)?)?;
        }
        world.place_airplane(airport, plane)?;
    }
    Ok(())
}
