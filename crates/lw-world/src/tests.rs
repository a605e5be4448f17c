//! Unit tests for lw-world.
//!
//! All tests build worlds by hand or from inline JSON; no fixture files.

#[cfg(test)]
mod helpers {
    use lw_core::{Airplane, Airport, CargoBox};

    use crate::World;

    /// Two airports `A`–`B` (weight 2), airplane `P` (capacity 2) and box `X`
    /// at `A`, plus an unplaced box `Y`.
    pub fn small_world() -> World {
        let mut world = World::new();
        world.add_airport(Airport::new("A")).unwrap();
        world.add_airport(Airport::new("B")).unwrap();
        world.add_link("A", "B", 2).unwrap();
        world.register_airplane("P").unwrap();
        world.register_box("X").unwrap();
        world.register_box("Y").unwrap();
        world.place_airplane("A", Airplane::new("P", 2)).unwrap();
        world.place_box("A", CargoBox::new("X")).unwrap();
        world
    }

    pub const EXAMPLE_JSON: &str = r#"{
        "initial_status": {
            "airports": 2,
            "airplanes": 1,
            "boxes": 1,
            "edges": { "Airport_1": { "Airport_2": 2 } },
            "vertices": {
                "Airport_1": {
                    "position": [0, 0],
                    "boxes": ["Box_1"],
                    "airplanes": { "Airplane_1": { "maxbox": 2, "boxes": [] } }
                },
                "Airport_2": { "position": [3.5, 4] }
            }
        },
        "goal": ["Box_1 in Airport_2"]
    }"#;
}

// ── World graph & containment ─────────────────────────────────────────────────

#[cfg(test)]
mod world {
    use lw_core::{Airport, CoreError};

    use super::helpers::small_world;
    use crate::{BoxLocation, World, WorldError};

    #[test]
    fn links_are_symmetric_and_last_write_wins() {
        let mut world = small_world();
        assert_eq!(world.airport("A").unwrap().weight_to("B"), Some(2));
        assert_eq!(world.airport("B").unwrap().weight_to("A"), Some(2));
        world.add_link("B", "A", 5).unwrap();
        assert_eq!(world.airport("A").unwrap().weight_to("B"), Some(5));
        assert_eq!(world.airport("B").unwrap().weight_to("A"), Some(5));
    }

    #[test]
    fn link_to_unknown_airport_fails() {
        let mut world = small_world();
        let err = world.add_link("A", "Z", 1).unwrap_err();
        assert!(matches!(err, WorldError::UnknownAirport(name) if name == "Z"));
        assert_eq!(world.airport("A").unwrap().weight_to("Z"), None);
    }

    #[test]
    fn zero_weight_is_rejected() {
        let mut world = small_world();
        assert!(matches!(
            world.add_link("A", "B", 0),
            Err(WorldError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn names_are_unique_across_kinds() {
        let mut world = small_world();
        assert!(matches!(world.register_box("P"), Err(WorldError::DuplicateName(_))));
        assert!(matches!(world.register_airplane("X"), Err(WorldError::DuplicateName(_))));
        assert!(matches!(
            world.add_airport(Airport::new("Y")),
            Err(WorldError::DuplicateName(_))
        ));
    }

    #[test]
    fn flat_index_includes_unplaced_entities() {
        let world = small_world();
        assert!(world.has_box("Y"));
        assert_eq!(world.locate_box("Y"), None);
        assert_eq!(world.box_names().collect::<Vec<_>>(), vec!["X", "Y"]);
    }

    #[test]
    fn locate_airplane_and_box() {
        let mut world = small_world();
        assert_eq!(world.locate_airplane("P"), Some("A"));
        assert_eq!(world.locate_airplane("ghost"), None);
        assert_eq!(world.locate_box("X"), Some(BoxLocation::Airport("A".into())));
        assert!(world.board("X", "P").unwrap());
        assert_eq!(
            world.locate_box("X"),
            Some(BoxLocation::Airplane { airport: "A".into(), airplane: "P".into() })
        );
    }

    #[test]
    fn board_then_unboard_round_trips() {
        let mut world = small_world();
        assert!(world.board("X", "P").unwrap());
        assert!(!world.airport("A").unwrap().has_box("X"));
        assert!(world.unboard("X", "P"));
        assert!(world.airport("A").unwrap().has_box("X"));
        assert!(!world.airplane("P").unwrap().contains("X"));
    }

    #[test]
    fn board_wrong_airport_is_refused() {
        let mut world = small_world();
        assert!(world.relocate_airplane("P", "A", "B"));
        assert!(!world.board("X", "P").unwrap());
        assert_eq!(world.locate_box("X"), Some(BoxLocation::Airport("A".into())));
    }

    #[test]
    fn unboard_box_not_aboard_is_refused() {
        let mut world = small_world();
        assert!(!world.unboard("X", "P"));
        assert!(!world.unboard("X", "ghost"));
    }

    #[test]
    fn board_full_airplane_keeps_box_on_ground() {
        let mut world = World::new();
        world.add_airport(Airport::new("A")).unwrap();
        world.register_airplane("P").unwrap();
        world.place_airplane("A", lw_core::Airplane::new("P", 0)).unwrap();
        world.register_box("X").unwrap();
        world.place_box("A", lw_core::CargoBox::new("X")).unwrap();

        let err = world.board("X", "P").unwrap_err();
        assert_eq!(err, CoreError::CapacityExceeded { airplane: "P".into(), maxbox: 0 });
        assert_eq!(world.locate_box("X"), Some(BoxLocation::Airport("A".into())));
    }

    #[test]
    fn relocate_carries_cargo() {
        let mut world = small_world();
        world.board("X", "P").unwrap();
        assert!(world.relocate_airplane("P", "A", "B"));
        assert_eq!(world.locate_airplane("P"), Some("B"));
        assert_eq!(
            world.locate_box("X"),
            Some(BoxLocation::Airplane { airport: "B".into(), airplane: "P".into() })
        );
    }

    #[test]
    fn relocate_from_wrong_airport_is_refused() {
        let mut world = small_world();
        assert!(!world.relocate_airplane("P", "B", "A"));
        assert!(!world.relocate_airplane("P", "A", "nowhere"));
        assert_eq!(world.locate_airplane("P"), Some("A"));
    }

    #[test]
    fn display_frames_airports() {
        let world = small_world();
        let text = world.to_string();
        assert!(text.starts_with("----- Environment -------\nA at (0, 0) {"));
        assert!(text.contains("\t\t- P with 0/2 boxes: []"));
        assert!(text.ends_with("}\n-------------------------"));
    }
}

// ── Goal parsing, plausibility, projection ────────────────────────────────────

#[cfg(test)]
mod goal {
    use crate::{Goal, GoalClause, WorldError};

    #[test]
    fn parse_trims_every_token() {
        let clause = GoalClause::parse("  Box_1 ,Box_2,  Box_3   in   Airport_2 ").unwrap();
        assert_eq!(clause.objects(), ["Box_1", "Box_2", "Box_3"]);
        assert_eq!(clause.location(), "Airport_2");
    }

    #[test]
    fn names_containing_in_are_not_split() {
        let clause: GoalClause = "Bin_1, Tin in Mainland".parse().unwrap();
        assert_eq!(clause.objects(), ["Bin_1", "Tin"]);
        assert_eq!(clause.location(), "Mainland");
    }

    #[test]
    fn comma_directly_before_in() {
        let clause = GoalClause::parse("Box_1,in Airport_2").unwrap();
        assert_eq!(clause.objects(), ["Box_1"]);
        assert_eq!(clause.location(), "Airport_2");

        let clause = GoalClause::parse("a, b , in X").unwrap();
        assert_eq!(clause.objects(), ["a", "b"]);
    }

    #[test]
    fn malformed_clauses_are_rejected() {
        for bad in [
            "Box_1 Airport_2",
            "in Airport_2",
            ",in Airport_2",
            "Box_1 in",
            "a, , b in X",
            "a,, in X",
            "a in b in c",
        ] {
            assert!(
                matches!(GoalClause::parse(bad), Err(WorldError::GoalSyntax(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn repeated_objects_collapse() {
        let clause = GoalClause::parse("a, b, a in X").unwrap();
        assert_eq!(clause.objects(), ["a", "b"]);
    }

    #[test]
    fn overlapping_clauses_are_not_plausible() {
        let goal = Goal::new(vec![
            GoalClause::new(["crate1"], "AirportA"),
            GoalClause::new(["crate1", "crate2"], "AirportB"),
        ]);
        match goal.verify() {
            Err(WorldError::GoalNotPlausible { object, first, second }) => {
                assert_eq!(object, "crate1");
                assert_eq!(first, "AirportA");
                assert_eq!(second, "AirportB");
            }
            other => panic!("expected GoalNotPlausible, got {other:?}"),
        }
    }

    #[test]
    fn same_location_overlap_is_still_rejected() {
        let goal = Goal::parse_all(["a in X", "a, b in X"]).unwrap();
        assert!(goal.verify().is_err());
    }

    #[test]
    fn disjoint_clauses_verify() {
        let goal = Goal::parse_all(["a, b in X", "c in Y", "d in X"]).unwrap();
        goal.verify().unwrap();
        assert_eq!(goal.clauses().len(), 3);
        assert_eq!(goal.clauses()[1].location(), "Y");
    }

    #[test]
    fn view_merges_shared_locations_in_clause_order() {
        let goal = Goal::parse_all(["b, a in X", "c in Y", "d in X"]).unwrap();
        let view = goal.view();
        assert_eq!(view.len(), 2);
        assert_eq!(view.get("X").unwrap(), ["b", "a", "d"]);
        assert_eq!(view.get("Y").unwrap(), ["c"]);
        assert!(view.get("Z").is_none());
    }

    #[test]
    fn empty_goal() {
        let goal = Goal::parse_all(Vec::<String>::new()).unwrap();
        assert!(goal.is_empty());
        assert!(goal.view().is_empty());
    }
}

// ── Status snapshot & goal check ──────────────────────────────────────────────

#[cfg(test)]
mod projection {
    use super::helpers::small_world;
    use crate::{Goal, GoalClause};

    #[test]
    fn snapshot_copies_airports() {
        let mut world = small_world();
        world.board("X", "P").unwrap();
        let status = world.status();

        let a = status.airport("A").unwrap();
        assert!(a.boxes.is_empty());
        assert_eq!(a.neighbors.get("B"), Some(&2));
        assert_eq!(a.airplanes["P"].maxbox, 2);
        assert_eq!(a.airplanes["P"].boxes, vec!["X".to_owned()]);
        assert_eq!(status.airplane_location("P"), Some("A"));
        assert!(status.airport("B").unwrap().airplanes.is_empty());
    }

    #[test]
    fn mutating_snapshot_leaves_world_alone() {
        let world = small_world();
        let mut status = world.status();
        status.airports.get_mut("A").unwrap().boxes.clear();
        status.airports.get_mut("A").unwrap().neighbors.insert("B".into(), 99);
        status.airports.remove("B");

        assert!(world.airport("A").unwrap().has_box("X"));
        assert_eq!(world.airport("A").unwrap().weight_to("B"), Some(2));
        assert_eq!(world.status().airports.len(), 2);
    }

    #[test]
    fn snapshot_serializes_as_airport_map() {
        let world = small_world();
        let json = serde_json::to_value(world.status()).unwrap();
        assert_eq!(json["A"]["boxes"], serde_json::json!(["X"]));
        assert_eq!(json["A"]["airplanes"]["P"]["maxbox"], 2);
        assert_eq!(json["B"]["position"]["x"], 0.0);
    }

    #[test]
    fn check_goal_on_airports_and_airplanes() {
        let mut world = small_world();
        world
            .set_goal(Goal::new(vec![GoalClause::new(["X"], "P")]))
            .unwrap();
        assert!(!world.check_goal());
        world.board("X", "P").unwrap();
        assert!(world.check_goal());

        world
            .set_goal(Goal::new(vec![
                GoalClause::new(["X"], "B"),
                GoalClause::new(["P"], "B"),
            ]))
            .unwrap();
        world.relocate_airplane("P", "A", "B");
        // X is aboard P, not on the ground at B.
        assert!(!world.check_goal());
        world.unboard("X", "P");
        assert!(world.check_goal());
    }

    #[test]
    fn unknown_goal_location_never_holds() {
        let mut world = small_world();
        world
            .set_goal(Goal::new(vec![GoalClause::new(["X"], "Atlantis")]))
            .unwrap();
        assert!(!world.check_goal());
    }

    #[test]
    fn empty_goal_is_satisfied() {
        assert!(small_world().check_goal());
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Write;

    use lw_core::{CoreError, EntityKind, Position};

    use super::helpers::EXAMPLE_JSON;
    use crate::{BoxLocation, WorldError, WorldLoader, load_world_json, load_world_str};

    fn load(json: &str) -> Result<crate::World, WorldError> {
        load_world_str(json)
    }

    #[test]
    fn example_document_loads() {
        let world = load(EXAMPLE_JSON).unwrap();
        assert_eq!(world.airports().count(), 2);
        assert_eq!(world.locate_airplane("Airplane_1"), Some("Airport_1"));
        assert_eq!(world.airplane("Airplane_1").unwrap().maxbox(), 2);
        assert_eq!(world.locate_box("Box_1"), Some(BoxLocation::Airport("Airport_1".into())));
        assert_eq!(world.airport("Airport_2").unwrap().position(), Position::new(3.5, 4.0));
        assert_eq!(world.airport("Airport_2").unwrap().weight_to("Airport_1"), Some(2));
        assert_eq!(world.goal_view().get("Airport_2").unwrap(), ["Box_1"]);
        assert!(!world.check_goal());
    }

    #[test]
    fn explicit_names_are_used_verbatim() {
        let world = load(r#"{
            "initial_status": {
                "airports": ["JFK", "LAX"],
                "airplanes": ["Jumbo"],
                "boxes": ["crate1", "crate2"],
                "edges": { "JFK": { "LAX": 4 } },
                "vertices": {
                    "JFK": { "airplanes": { "Jumbo": { "maxbox": 3, "boxes": ["crate2"] } } },
                    "LAX": { "boxes": ["crate1"] }
                }
            },
            "goal": ["crate1, crate2 in JFK"]
        }"#).unwrap();
        assert_eq!(world.locate_airplane("Jumbo"), Some("JFK"));
        assert_eq!(
            world.locate_box("crate2"),
            Some(BoxLocation::Airplane { airport: "JFK".into(), airplane: "Jumbo".into() })
        );
        assert_eq!(world.locate_box("crate1"), Some(BoxLocation::Airport("LAX".into())));
    }

    #[test]
    fn counts_and_lists_mix() {
        let world = load(r#"{
            "initial_status": { "airports": ["Hub"], "airplanes": 2, "boxes": 0 }
        }"#).unwrap();
        assert!(world.has_airport("Hub"));
        assert!(world.has_airplane("Airplane_1") && world.has_airplane("Airplane_2"));
        assert_eq!(world.locate_airplane("Airplane_1"), None);
        assert!(world.goal().is_empty());
    }

    #[test]
    fn duplicate_listed_names_fail() {
        let err = load(r#"{
            "initial_status": { "airports": ["A"], "boxes": ["A"] }
        }"#).unwrap_err();
        assert!(matches!(err, WorldError::DuplicateName(name) if name == "A"));
    }

    #[test]
    fn edge_to_unknown_airport_fails() {
        for json in [
            r#"{ "initial_status": { "airports": 1, "edges": { "Airport_1": { "Airport_9": 1 } } } }"#,
            r#"{ "initial_status": { "airports": 1, "edges": { "Airport_9": { "Airport_1": 1 } } } }"#,
        ] {
            let err = load(json).unwrap_err();
            assert!(matches!(err, WorldError::UnknownAirport(name) if name == "Airport_9"));
        }
    }

    #[test]
    fn repeated_edge_last_in_document_wins() {
        let world = load(r#"{
            "initial_status": {
                "airports": ["B", "A"],
                "edges": { "B": { "A": 5 }, "A": { "B": 2 } }
            }
        }"#).unwrap();
        assert_eq!(world.airport("A").unwrap().weight_to("B"), Some(2));
        assert_eq!(world.airport("B").unwrap().weight_to("A"), Some(2));
    }

    #[test]
    fn weights_must_be_integers() {
        let err = load(r#"{
            "initial_status": { "airports": ["A", "B"], "edges": { "A": { "B": 1.5 } } }
        }"#).unwrap_err();
        assert!(matches!(err, WorldError::Json(_)));

        let err = load(r#"{
            "initial_status": { "airports": ["A", "B"], "edges": { "A": { "B": 0 } } }
        }"#).unwrap_err();
        assert!(matches!(err, WorldError::InvalidWeight { .. }));
    }

    #[test]
    fn vertices_apply_in_document_order() {
        let err = load(r#"{
            "initial_status": {
                "airports": ["A", "B"],
                "vertices": {
                    "B": { "boxes": ["ghost"] },
                    "A": { "airplanes": { "phantom": {} } }
                }
            }
        }"#).unwrap_err();
        assert!(matches!(err, WorldError::BoxAlreadyAssigned(name) if name == "ghost"));
    }

    #[test]
    fn vertex_for_unknown_airport_fails() {
        let err = load(r#"{
            "initial_status": { "airports": 1, "vertices": { "Nowhere": {} } }
        }"#).unwrap_err();
        assert!(matches!(err, WorldError::UnknownAirport(_)));
    }

    #[test]
    fn box_placed_twice_fails() {
        let err = load(r#"{
            "initial_status": {
                "airports": 2, "boxes": 1,
                "vertices": {
                    "Airport_1": { "boxes": ["Box_1"] },
                    "Airport_2": { "boxes": ["Box_1"] }
                }
            }
        }"#).unwrap_err();
        assert!(matches!(err, WorldError::BoxAlreadyAssigned(name) if name == "Box_1"));
    }

    #[test]
    fn unknown_box_counts_as_already_assigned() {
        let err = load(r#"{
            "initial_status": { "airports": 1, "vertices": { "Airport_1": { "boxes": ["ghost"] } } }
        }"#).unwrap_err();
        assert!(matches!(err, WorldError::BoxAlreadyAssigned(_)));
    }

    #[test]
    fn box_on_ground_and_aboard_fails() {
        let err = load(r#"{
            "initial_status": {
                "airports": 1, "airplanes": 1, "boxes": 1,
                "vertices": { "Airport_1": {
                    "boxes": ["Box_1"],
                    "airplanes": { "Airplane_1": { "maxbox": 1, "boxes": ["Box_1"] } }
                } }
            }
        }"#).unwrap_err();
        assert!(matches!(err, WorldError::BoxAlreadyAssigned(_)));
    }

    #[test]
    fn airplane_placed_twice_fails() {
        let err = load(r#"{
            "initial_status": {
                "airports": 2, "airplanes": 1,
                "vertices": {
                    "Airport_1": { "airplanes": { "Airplane_1": { "maxbox": 1, "boxes": [] } } },
                    "Airport_2": { "airplanes": { "Airplane_1": { "maxbox": 1, "boxes": [] } } }
                }
            }
        }"#).unwrap_err();
        assert!(matches!(err, WorldError::AirplaneAlreadyAssigned(name) if name == "Airplane_1"));
    }

    #[test]
    fn overfull_airplane_fails() {
        let err = load(r#"{
            "initial_status": {
                "airports": 1, "airplanes": 1, "boxes": 2,
                "vertices": { "Airport_1": {
                    "airplanes": { "Airplane_1": { "maxbox": 1, "boxes": ["Box_1", "Box_2"] } }
                } }
            }
        }"#).unwrap_err();
        assert!(matches!(
            err,
            WorldError::Capacity(CoreError::CapacityExceeded { maxbox: 1, .. })
        ));
    }

    #[test]
    fn missing_maxbox_defaults_to_ten() {
        let world = load(r#"{
            "initial_status": {
                "airports": 1, "airplanes": 1,
                "vertices": { "Airport_1": { "airplanes": { "Airplane_1": {} } } }
            }
        }"#).unwrap();
        assert_eq!(world.airplane("Airplane_1").unwrap().maxbox(), lw_core::DEFAULT_MAXBOX);
    }

    #[test]
    fn overlapping_goal_fails_construction() {
        let err = load(r#"{
            "initial_status": { "airports": 2, "boxes": 2 },
            "goal": ["Box_1 in Airport_1", "Box_1, Box_2 in Airport_2"]
        }"#).unwrap_err();
        assert!(matches!(err, WorldError::GoalNotPlausible { object, .. } if object == "Box_1"));
    }

    #[test]
    fn malformed_goal_fails_construction() {
        let err = load(r#"{
            "initial_status": { "airports": 1 },
            "goal": ["Box_1 at Airport_1"]
        }"#).unwrap_err();
        assert!(matches!(err, WorldError::GoalSyntax(_)));
    }

    #[test]
    fn malformed_json_fails() {
        assert!(matches!(load("{ not json"), Err(WorldError::Json(_))));
        assert!(matches!(load(r#"{ "goal": [] }"#), Err(WorldError::Json(_))));
    }

    #[test]
    fn loader_keeps_numbering_across_worlds() {
        let mut loader = WorldLoader::new();
        let first = loader.load_str(EXAMPLE_JSON).unwrap();
        assert!(first.has_airport("Airport_1"));

        let second = loader.load_str(r#"{ "initial_status": { "airports": 2 } }"#).unwrap();
        assert!(second.has_airport("Airport_3") && second.has_airport("Airport_4"));
        assert!(!second.has_airport("Airport_1"));
        assert_eq!(loader.names().issued(EntityKind::Airport), 4);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXAMPLE_JSON.as_bytes()).unwrap();
        let world = load_world_json(file.path()).unwrap();
        assert_eq!(world.locate_airplane("Airplane_1"), Some("Airport_1"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_world_json(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, WorldError::Io(_)));
    }
}
