//! Auto-naming for entities created from counts.
//!
//! Each [`EntityKind`] has its own monotonically increasing counter starting
//! at 1.  A generated name has the shape `"{Kind}_{n}"` (`Box_1`,
//! `Airplane_3`, …).  The counters live in a [`NameGenerator`] value rather
//! than in global state, so two loaders (or two tests) never influence each
//! other's numbering.

use std::fmt;

/// The three kinds of named entity in a world.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum EntityKind {
    Box,
    Airplane,
    Airport,
}

impl EntityKind {
    /// Name prefix used by [`NameGenerator`].
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Box      => "Box",
            EntityKind::Airplane => "Airplane",
            EntityKind::Airport  => "Airport",
        }
    }

    #[inline]
    fn slot(self) -> usize {
        match self {
            EntityKind::Box      => 0,
            EntityKind::Airplane => 1,
            EntityKind::Airport  => 2,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hands out unique `"{Kind}_{n}"` names, one counter per kind.
///
/// Numbers are never reused for the lifetime of the generator, including
/// across several worlds built with it.
#[derive(Clone, Debug, Default)]
pub struct NameGenerator {
    issued: [u32; 3],
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the next unused name for `kind`.
    pub fn next(&mut self, kind: EntityKind) -> String {
        let counter = &mut self.issued[kind.slot()];
        *counter += 1;
        format!("{}_{}", kind, counter)
    }

    /// How many names of `kind` have been issued so far.
    pub fn issued(&self, kind: EntityKind) -> u32 {
        self.issued[kind.slot()]
    }
}
