//! `lw-core` — foundational types for the `logiworld` simulator.
//!
//! This crate is a dependency of every other `lw-*` crate.  It has no `lw-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`entity`]   | `CargoBox`, `Airplane`, `Airport`                     |
//! | [`names`]    | `EntityKind`, `NameGenerator`                         |
//! | [`geo`]      | `Position`                                            |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `Position`.              |

pub mod entity;
pub mod error;
pub mod geo;
pub mod names;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use entity::{Airplane, Airport, CargoBox, DEFAULT_MAXBOX};
pub use error::{CoreError, CoreResult};
pub use geo::Position;
pub use names::{EntityKind, NameGenerator};
