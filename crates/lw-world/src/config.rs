//! Serde schema of the JSON configuration document.
//!
//! The schema mirrors the document one-to-one; all validation happens in
//! [`WorldLoader::build`][crate::WorldLoader::build].

use indexmap::IndexMap;
use lw_core::DEFAULT_MAXBOX;
use serde::{Deserialize, Serialize};

/// Top-level document: initial world state plus goal sentences.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct WorldConfig {
    pub initial_status: InitialStatus,

    /// Clauses of the form `"obj1, obj2 in location"`.
    #[serde(default)]
    pub goal: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct InitialStatus {
    #[serde(default)]
    pub airports: Population,
    #[serde(default)]
    pub airplanes: Population,
    #[serde(default)]
    pub boxes: Population,

    /// `airport → { neighbor → weight }`, in document order.  Each entry is
    /// installed on both endpoints, so a later entry for the same pair
    /// overwrites an earlier one.  Weights are positive integers.
    #[serde(default)]
    pub edges: IndexMap<String, IndexMap<String, u32>>,

    /// Per-airport initial placement, in document order.
    #[serde(default)]
    pub vertices: IndexMap<String, VertexConfig>,
}

/// How many entities of one kind exist, or their explicit names.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Population {
    /// Create this many auto-named entities (`Box_1`, `Box_2`, …).
    Count(usize),
    /// Create one entity per listed name, verbatim.
    Names(Vec<String>),
}

impl Default for Population {
    fn default() -> Self {
        Population::Count(0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct VertexConfig {
    #[serde(default)]
    pub position: Option<[f64; 2]>,
    #[serde(default)]
    pub boxes: Vec<String>,
    #[serde(default)]
    pub airplanes: IndexMap<String, AirplaneConfig>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AirplaneConfig {
    #[serde(default = "default_maxbox")]
    pub maxbox: usize,
    #[serde(default)]
    pub boxes: Vec<String>,
}

impl Default for AirplaneConfig {
    fn default() -> Self {
        Self { maxbox: DEFAULT_MAXBOX, boxes: Vec::new() }
    }
}

fn default_maxbox() -> usize {
    DEFAULT_MAXBOX
}
