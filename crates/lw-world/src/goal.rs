//! Goal clauses: which objects must end up where.
//!
//! A clause is written `"obj1, obj2, ... in location"`.  The sentence is split
//! on the standalone word `in`, then the object part on commas, trimming
//! whitespace around every token.  `in` counts as a word when it is followed
//! by whitespace (or ends the sentence) and preceded by whitespace, a comma,
//! or the start of the sentence, so `"Box_1,in Airport_2"` parses while
//! names that merely contain the letters "in" (`"Mainland"`, `"Bin_3"`) are
//! not split.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::Serialize;

use crate::{WorldError, WorldResult};

// ── GoalClause ────────────────────────────────────────────────────────────────

/// One requirement: every object in `objects` must reside at `location`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalClause {
    objects:  Vec<String>,
    location: String,
}

impl GoalClause {
    /// Build a clause directly.  Repeated object names are kept once, in
    /// first-seen order.
    pub fn new<I, S>(objects: I, location: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        let objects = objects
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| seen.insert(name.clone()))
            .collect();
        Self { objects, location: location.into() }
    }

    /// Parse a textual clause such as `"Box_1, Box_2 in Airport_3"`.
    pub fn parse(sentence: &str) -> WorldResult<Self> {
        let syntax = || WorldError::GoalSyntax(sentence.to_owned());

        let (objects, location) = split_on_in(sentence).ok_or_else(syntax)?;
        let location = location.trim();
        if location.is_empty() {
            return Err(syntax());
        }

        let objects = objects.trim_end();
        let objects = objects.strip_suffix(',').unwrap_or(objects);
        let objects: Vec<&str> = objects.split(',').map(str::trim).collect();
        if objects.iter().any(|name| name.is_empty()) {
            return Err(syntax());
        }

        Ok(Self::new(objects, location))
    }

    pub fn objects(&self) -> &[String] {
        &self.objects
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// First object this clause shares with `other`, if any.
    fn shared_object<'a>(&'a self, other: &GoalClause) -> Option<&'a str> {
        let theirs: BTreeSet<&str> = other.objects.iter().map(String::as_str).collect();
        self.objects
            .iter()
            .map(String::as_str)
            .find(|name| theirs.contains(name))
    }
}

impl FromStr for GoalClause {
    type Err = WorldError;

    fn from_str(s: &str) -> WorldResult<Self> {
        Self::parse(s)
    }
}

/// Split `sentence` around its single standalone `in` word.
///
/// Returns `None` when there is no such word or more than one.
fn split_on_in(sentence: &str) -> Option<(&str, &str)> {
    let opens  = |c: Option<char>| c.is_none_or(|c| c.is_whitespace() || c == ',');
    let closes = |c: Option<char>| c.is_none_or(char::is_whitespace);

    let mut found = None;
    for (idx, _) in sentence.match_indices("in") {
        let before = sentence[..idx].chars().next_back();
        let after  = sentence[idx + 2..].chars().next();
        if opens(before) && closes(after) {
            if found.is_some() {
                return None;
            }
            found = Some(idx);
        }
    }
    found.map(|idx| (&sentence[..idx], &sentence[idx + 2..]))
}

// ── Goal ──────────────────────────────────────────────────────────────────────

/// The ordered list of clauses a world must satisfy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Goal {
    clauses: Vec<GoalClause>,
}

impl Goal {
    pub fn new(clauses: Vec<GoalClause>) -> Self {
        Self { clauses }
    }

    /// Parse every sentence, preserving input order.  Does not check
    /// plausibility; call [`verify`](Self::verify) for that.
    pub fn parse_all<I, S>(sentences: I) -> WorldResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let clauses = sentences
            .into_iter()
            .map(|s| GoalClause::parse(s.as_ref()))
            .collect::<WorldResult<_>>()?;
        Ok(Self { clauses })
    }

    pub fn clauses(&self) -> &[GoalClause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Reject goals that require one object in two places.
    ///
    /// Every pair of clauses is compared, including clauses that name the
    /// same location.
    pub fn verify(&self) -> WorldResult<()> {
        for (i, first) in self.clauses.iter().enumerate() {
            for second in &self.clauses[i + 1..] {
                if let Some(object) = first.shared_object(second) {
                    return Err(WorldError::GoalNotPlausible {
                        object: object.to_owned(),
                        first:  first.location.clone(),
                        second: second.location.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Project the goal as location → required objects.
    ///
    /// Clauses that share a location are merged in clause order.
    pub fn view(&self) -> GoalView {
        let mut by_location: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for clause in &self.clauses {
            by_location
                .entry(clause.location.clone())
                .or_default()
                .extend(clause.objects.iter().cloned());
        }
        GoalView(by_location)
    }
}

// ── GoalView ──────────────────────────────────────────────────────────────────

/// Owned, read-only projection of a [`Goal`] handed to agents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GoalView(BTreeMap<String, Vec<String>>);

impl GoalView {
    /// Objects required at `location`.
    pub fn get(&self, location: &str) -> Option<&[String]> {
        self.0.get(location).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.0.iter().map(|(loc, objs)| (loc.as_str(), objs.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}
