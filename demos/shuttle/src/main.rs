//! shuttle — smallest end-to-end run of the logiworld simulator.
//!
//! Loads a world (the embedded three-airport network, or the JSON file given
//! as the first argument), lets a one-hop courier agent plan against it, and
//! prints every action outcome plus the final score.
//!
//! Set `RUST_LOG=debug` to see the engine's per-action logs.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use lw_agent::{Action, Agent, Tally};
use lw_sim::{ActionOutcome, CycleReport, SimBuilder, SimObserver};
use lw_world::{GoalView, StatusSnapshot, load_world_json, load_world_str};

// ── Constants ─────────────────────────────────────────────────────────────────

const MAX_CYCLES: u64 = 8;

const WORLD_JSON: &str = r#"{
    "initial_status": {
        "airports":  3,
        "airplanes": 2,
        "boxes":     3,
        "edges": {
            "Airport_1": { "Airport_2": 2, "Airport_3": 5 },
            "Airport_2": { "Airport_3": 1 }
        },
        "vertices": {
            "Airport_1": {
                "position":  [0, 0],
                "boxes":     ["Box_1", "Box_2"],
                "airplanes": { "Airplane_1": { "maxbox": 2, "boxes": [] } }
            },
            "Airport_2": {
                "position":  [2, 0],
                "airplanes": { "Airplane_2": { "maxbox": 1, "boxes": ["Box_3"] } }
            },
            "Airport_3": { "position": [2, 1] }
        }
    },
    "goal": ["Box_1, Box_2 in Airport_2", "Box_3 in Airport_3"]
}"#;

// ── Agent ─────────────────────────────────────────────────────────────────────

/// Ships misplaced boxes one hop at a time.
///
/// Each cycle, every airplane takes the boxes it can reach (on its airport's
/// ground or already aboard) whose goal location is a direct neighbor, flies
/// there and unloads them.  Each airplane makes at most one flight per cycle.
#[derive(Default)]
struct Courier {
    tally: Tally,
}

impl Agent for Courier {
    fn solve(&mut self, status: StatusSnapshot, goal: GoalView) -> Vec<Action> {
        let mut plan = Vec::new();
        let mut claimed = BTreeSet::new();

        for (here, airport) in &status.airports {
            for (plane, cargo) in &airport.airplanes {
                let reachable = airport.boxes.iter().chain(&cargo.boxes);
                let Some(target) = reachable
                    .filter(|b| !claimed.contains(b.as_str()))
                    .find_map(|b| target_of(&goal, b).filter(|t| airport.neighbors.contains_key(*t)))
                else {
                    continue;
                };

                let mut room = cargo.maxbox - cargo.boxes.len();
                let mut shipped = Vec::new();
                for b in &cargo.boxes {
                    if target_of(&goal, b) == Some(target) {
                        shipped.push(b.clone());
                    }
                }
                for b in &airport.boxes {
                    if room > 0 && target_of(&goal, b) == Some(target) && !claimed.contains(b.as_str()) {
                        plan.push(Action::load(b.clone(), plane.clone()));
                        shipped.push(b.clone());
                        room -= 1;
                    }
                }
                plan.push(Action::fly(plane.clone(), here.clone(), target));
                for b in shipped {
                    plan.push(Action::unload(b.clone(), plane.clone()));
                    claimed.insert(b);
                }
            }
        }
        plan
    }

    fn tally(&self) -> &Tally {
        &self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}

/// Goal location of `object`, if any clause names it.
fn target_of<'a>(goal: &'a GoalView, object: &str) -> Option<&'a str> {
    goal.iter()
        .find(|(_, objects)| objects.iter().any(|o| o == object))
        .map(|(location, _)| location)
}

// ── Observer ──────────────────────────────────────────────────────────────────

struct Printer;

impl SimObserver for Printer {
    fn on_cycle_start(&mut self, cycle: u64, _status: &StatusSnapshot) {
        println!("-- cycle {cycle}");
    }

    fn on_action(&mut self, action: &Action, outcome: ActionOutcome, tally: &Tally) {
        println!("   {:<34} {:<28} {}", action.to_string(), format!("{outcome:?}"), tally);
    }

    fn on_cycle_end(&mut self, report: &CycleReport) {
        println!(
            "   applied {}  ignored {}  penalized {}  goal {}",
            report.applied,
            report.ignored,
            report.penalized,
            if report.goal_reached { "reached" } else { "open" },
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let world = match std::env::args().nth(1) {
        Some(path) => load_world_json(Path::new(&path))
            .with_context(|| format!("loading {path}"))?,
        None => load_world_str(WORLD_JSON)?,
    };

    println!("=== shuttle — logiworld ===");
    println!("{world}");
    println!("Goal: {}", serde_json::to_string(&world.goal_view())?);
    println!();

    let mut sim = SimBuilder::new(world, Courier::default()).build();
    let mut printer = Printer;
    while sim.cycles() < MAX_CYCLES {
        let report = sim.execute_with(&mut printer)?;
        if report.goal_reached || report.actions() == 0 {
            break;
        }
    }

    println!();
    println!("{}", sim.world());
    println!("{}", sim.score());
    if !sim.check_goal() {
        println!("Goal not reached after {} cycles.", sim.cycles());
    }
    Ok(())
}
