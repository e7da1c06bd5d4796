//! Terminal color theme system
//!
//! Provides palettes for dark and light terminal backgrounds.
//! Auto-detects via the COLORFGBG env var, or manual override with the
//! --light flag or DG_LIGHT_BG=1 environment variable.

use dg_core::dungeon::TileType;
use ratatui::style::Color;

/// Color theme for terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text
    pub text_dim: Color,
    /// Map border
    pub border: Color,
    /// Warnings in the status line
    pub bad: Color,

    // Map terrain
    pub map_empty: Color,
    pub map_wall: Color,
    pub map_floor: Color,
    pub map_door: Color,
    pub map_entrance: Color,
    pub map_exit: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::Gray,
            border: Color::White,
            bad: Color::LightRed,
            map_empty: Color::Black,
            map_wall: Color::DarkGray,
            map_floor: Color::Gray,
            map_door: Color::Yellow,
            map_entrance: Color::Red,
            map_exit: Color::Green,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            bad: Color::Red,
            map_empty: Color::White,
            map_wall: Color::DarkGray,
            map_floor: Color::Gray,
            map_door: Color::Yellow,
            map_entrance: Color::Red,
            map_exit: Color::Green,
        }
    }

    /// Auto-detect terminal background and return the matching theme.
    pub fn detect() -> Self {
        let forced = std::env::var("DG_LIGHT_BG").ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        if is_light_background(forced.as_deref(), colorfgbg.as_deref()) {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Foreground color for a map tile
    pub fn tile_color(&self, typ: TileType) -> Color {
        match typ {
            TileType::Empty => self.map_empty,
            TileType::Wall => self.map_wall,
            TileType::Floor => self.map_floor,
            TileType::Door => self.map_door,
            TileType::StairsUp => self.map_entrance,
            TileType::StairsDown => self.map_exit,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

/// Decide the background from the DG_LIGHT_BG override and COLORFGBG
fn is_light_background(forced: Option<&str>, colorfgbg: Option<&str>) -> bool {
    if let Some(val) = forced {
        return val == "1" || val.eq_ignore_ascii_case("true");
    }

    // COLORFGBG is "fg;bg" (sometimes "fg;default;bg") with 0-15 color indices.
    // Light backgrounds have bg 7 or 9-15; 8 is bright black.
    if let Some(colorfgbg) = colorfgbg
        && let Some(bg_str) = colorfgbg.rsplit(';').next()
        && let Ok(bg_idx) = bg_str.parse::<u8>()
    {
        return matches!(bg_idx, 7 | 9..=15);
    }

    false
}
