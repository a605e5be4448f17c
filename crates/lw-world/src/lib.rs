//! `lw-world` — the world graph, its goal, and how it is loaded.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`world`]   | `World` (airports, flat entity index, goal), `BoxLocation`  |
//! | [`goal`]    | `GoalClause`, `Goal`, `GoalView`                            |
//! | [`status`]  | `StatusSnapshot`, `AirportStatus`, `AirplaneStatus`         |
//! | [`config`]  | serde schema of the JSON configuration document             |
//! | [`loader`]  | `WorldLoader`, `load_world_json`, `load_world_str`          |
//! | [`error`]   | `WorldError`, `WorldResult<T>`                              |
//!
//! # Configuration document (summary)
//!
//! ```json
//! {
//!   "initial_status": {
//!     "airports": 2, "airplanes": 1, "boxes": 1,
//!     "edges":    { "Airport_1": { "Airport_2": 2 } },
//!     "vertices": {
//!       "Airport_1": {
//!         "position":  [0, 0],
//!         "boxes":     ["Box_1"],
//!         "airplanes": { "Airplane_1": { "maxbox": 2, "boxes": [] } }
//!       }
//!     }
//!   },
//!   "goal": ["Box_1 in Airport_2"]
//! }
//! ```

pub mod config;
pub mod error;
pub mod goal;
pub mod loader;
pub mod status;
pub mod world;

#[cfg(test)]
mod tests;

pub use config::{AirplaneConfig, InitialStatus, Population, VertexConfig, WorldConfig};
pub use error::{WorldError, WorldResult};
pub use goal::{Goal, GoalClause, GoalView};
pub use loader::{WorldLoader, load_world_json, load_world_str};
pub use status::{AirplaneStatus, AirportStatus, StatusSnapshot};
pub use world::{BoxLocation, World};
