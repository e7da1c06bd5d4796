//! Headless output: the map as text or JSON

use dg_core::GenerationReport;
use dg_core::dungeon::{DungeonState, Position, all_rooms_reachable};

fn marker(pos: Option<Position>) -> String {
    pos.map_or_else(|| "none".to_string(), |p| p.to_string())
}

/// ASCII map followed by a short summary
pub fn text_dump(state: &DungeonState, report: &GenerationReport) -> String {
    let summary = format!(
        "Rooms: {}/{} (skipped {})\nEntrance: {}\nExit: {}\nConnected: {}\nSeed: {}\n",
        report.placed_rooms,
        report.target_rooms,
        report.skipped_rooms,
        marker(state.entrance()),
        marker(state.exit()),
        all_rooms_reachable(state),
        report.seed
    );
    let mut out = state.grid().to_string();
    out.push_str(&summary);
    out
}

/// The full state as pretty JSON
pub fn json_dump(state: &DungeonState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(state)
}
