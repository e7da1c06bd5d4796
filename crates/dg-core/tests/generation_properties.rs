//! Layout invariants checked over full generation runs

use dg_core::dungeon::{
    BreachPolicy, DungeonState, Position, TileType, all_rooms_reachable, flood_fill,
    stair_counts, unreachable_rooms,
};
use dg_core::{
    DungeonGenerator, GRID_HEIGHT, GRID_WIDTH, GenerationReport, GeneratorConfig, MAX_ROOMS,
    MIN_ROOMS, ROOM_BUFFER,
};
use proptest::prelude::*;

fn generate_with_report(
    seed: u64,
    target: usize,
    policy: BreachPolicy,
) -> (DungeonGenerator, GenerationReport) {
    let config = GeneratorConfig {
        breach_policy: policy,
        ..Default::default()
    };
    let mut generator = DungeonGenerator::with_seed(config, seed).unwrap();
    let report = generator.generate(target).unwrap();
    (generator, report)
}

fn generate(seed: u64, target: usize, policy: BreachPolicy) -> DungeonGenerator {
    generate_with_report(seed, target, policy).0
}

fn assert_rooms_in_bounds(state: &DungeonState) {
    let (w, h) = (state.grid().width(), state.grid().height());
    for room in state.rooms() {
        assert!(room.x >= 1 && room.y >= 1, "{room:?}");
        assert!(room.x + room.width < w - 1, "{room:?}");
        assert!(room.y + room.height < h - 1, "{room:?}");
    }
}

fn assert_no_overlap(state: &DungeonState) {
    let rooms = state.rooms();
    for (i, a) in rooms.iter().enumerate() {
        for b in &rooms[i + 1..] {
            assert!(!a.overlaps(b, ROOM_BUFFER), "{a:?} overlaps {b:?}");
        }
    }
}

fn assert_stairs(state: &DungeonState) {
    let grid = state.grid();
    let start = state.rooms()[0];
    assert_eq!(grid.typ(start.center_x, start.center_y), Some(TileType::StairsUp));
    assert_eq!(state.entrance(), Some(start.center()));

    if state.room_count() >= 2 {
        assert_eq!(stair_counts(grid), (1, 1));
        let exit = state.exit().unwrap();
        assert_eq!(grid.typ(exit.x, exit.y), Some(TileType::StairsDown));
    } else {
        assert_eq!(stair_counts(grid), (1, 0));
    }
}

/// One corridor per placed room after the start, each to an earlier room
fn assert_links(report: &GenerationReport) {
    assert_eq!(report.links.len(), report.placed_rooms - 1);
    for (i, &(newest, partner)) in report.links.iter().enumerate() {
        assert_eq!(newest, i + 1, "links out of placement order");
        assert!(partner < newest, "room {newest} linked forward to {partner}");
    }
}

fn assert_exit_is_farthest(state: &DungeonState) {
    if state.room_count() < 2 {
        return;
    }
    let entrance = state.entrance().unwrap();
    let exit = state.exit().unwrap();
    let exit_dist = entrance.distance(exit);
    let exit_index = state
        .rooms()
        .iter()
        .position(|room| room.center() == exit)
        .unwrap();

    assert!(exit_index >= 1);
    for (i, room) in state.rooms().iter().enumerate().skip(1) {
        let dist = entrance.distance(room.center());
        assert!(dist <= exit_dist, "room {i} is farther than the exit");
        // Ties go to the earliest room
        if i < exit_index {
            assert!(dist < exit_dist);
        }
    }
}

fn assert_valid_layout(state: &DungeonState) {
    assert!(state.room_count() >= 1);
    assert_rooms_in_bounds(state);
    assert_no_overlap(state);
    assert_stairs(state);
    assert_exit_is_farthest(state);
    assert!(
        all_rooms_reachable(state),
        "unreachable rooms: {:?}\n{}",
        unreachable_rooms(state),
        state.grid()
    );
}

#[test]
fn test_default_scenario() {
    let generator = generate(42, 10, BreachPolicy::Open);
    let state = generator.state();

    assert_eq!(state.grid().width(), GRID_WIDTH);
    assert_eq!(state.grid().height(), GRID_HEIGHT);
    assert!((1..=10).contains(&state.room_count()));
    for room in state.rooms() {
        assert!((4..=10).contains(&room.width));
        assert!((4..=10).contains(&room.height));
    }
    assert_valid_layout(state);
}

#[test]
fn test_boundary_room_counts() {
    for seed in [1, 7, 42, 1337, 2026] {
        for target in [MIN_ROOMS, MAX_ROOMS] {
            let generator = generate(seed, target, BreachPolicy::Open);
            let state = generator.state();
            assert!(state.room_count() <= target);
            assert_valid_layout(state);
        }
    }
}

#[test]
fn test_doors_policy_layout() {
    let generator = generate(77, MAX_ROOMS, BreachPolicy::Doors);
    let state = generator.state();
    assert_valid_layout(state);

    // Every door sits on some room's wall ring
    for door in state.grid().positions_of(TileType::Door) {
        assert!(
            state.rooms().iter().any(|room| room.is_border(door.x, door.y)),
            "stray door at {door}"
        );
    }
}

#[test]
fn test_entrance_reaches_every_room_interior() {
    let generator = generate(99, 15, BreachPolicy::Open);
    let state = generator.state();
    let reach = flood_fill(state.grid(), state.entrance().unwrap());

    for room in state.rooms() {
        let center = room.center();
        assert!(reach.contains(center), "center {center} not reached");
    }
    assert!(!reach.contains(Position::new(0, 0)));
}

#[test]
fn test_reset_twice_matches_reset_once() {
    let mut generator = generate(3, 12, BreachPolicy::Open);
    generator.reset();
    let once = generator.state().clone();
    generator.reset();
    let twice = generator.state();

    assert!(twice.grid().is_blank());
    assert_eq!(twice.room_count(), 0);
    assert_eq!(once.grid(), twice.grid());
    assert_eq!(once.rooms(), twice.rooms());
}

#[test]
fn test_repeated_runs_stay_valid() {
    let mut generator = DungeonGenerator::with_seed(GeneratorConfig::default(), 11).unwrap();
    for target in MIN_ROOMS..=MAX_ROOMS {
        let report = generator.generate(target).unwrap();
        assert_eq!(report.placed_rooms + report.skipped_rooms, target);
        assert_links(&report);
        assert_valid_layout(generator.state());
    }
}

#[test]
fn test_partners_are_not_only_the_start_room() {
    let mut later_partners = 0;
    for seed in 0..20 {
        let (_, report) = generate_with_report(seed, MAX_ROOMS, BreachPolicy::Open);
        assert_links(&report);
        later_partners += report.links.iter().filter(|&&(_, partner)| partner > 0).count();
    }
    assert!(later_partners > 0);
}

#[test]
fn test_state_exports_as_json() {
    let generator = generate(8, 6, BreachPolicy::Open);
    let json = serde_json::to_string(generator.state()).unwrap();
    let restored: DungeonState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.grid(), generator.state().grid());
    assert_eq!(restored.rooms(), generator.state().rooms());
    assert_eq!(restored.exit(), generator.state().exit());
}

fn breach_policy() -> impl Strategy<Value = BreachPolicy> {
    prop_oneof![Just(BreachPolicy::Open), Just(BreachPolicy::Doors)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_every_run_is_valid(
        seed in any::<u64>(),
        target in MIN_ROOMS..=MAX_ROOMS,
        policy in breach_policy(),
    ) {
        let (generator, report) = generate_with_report(seed, target, policy);
        let state = generator.state();
        prop_assert!(state.room_count() <= target);
        prop_assert_eq!(report.placed_rooms, state.room_count());
        assert_links(&report);
        assert_valid_layout(state);
    }

    #[test]
    fn prop_seed_reproduces_layout(seed in any::<u64>(), target in MIN_ROOMS..=MAX_ROOMS) {
        let a = generate(seed, target, BreachPolicy::Open);
        let b = generate(seed, target, BreachPolicy::Open);
        prop_assert_eq!(a.state().grid(), b.state().grid());
        prop_assert_eq!(a.state().rooms(), b.state().rooms());
    }
}
