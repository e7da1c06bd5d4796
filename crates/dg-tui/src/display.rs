//! Glyph system for TUI rendering
//!
//! Supports classic ASCII and Unicode block characters.

use dg_core::dungeon::TileType;
use strum::{Display, EnumString, VariantNames};

/// Available graphics modes for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames, Default)]
#[strum(serialize_all = "lowercase")]
pub enum GraphicsMode {
    /// Classic ASCII characters.
    Classic,
    /// Unicode block characters.
    Fancy,
    /// Automatically detect support.
    #[default]
    Auto,
}

/// Set of glyphs used for rendering map tiles.
pub trait GlyphSet: Send + Sync {
    fn tile_char(&self, typ: TileType) -> char;
}

/// Plain ASCII glyph set, same characters as the text dump.
pub struct ClassicGlyphs;

impl GlyphSet for ClassicGlyphs {
    fn tile_char(&self, typ: TileType) -> char {
        typ.symbol()
    }
}

/// Unicode glyph set: solid walls, dotted floor.
pub struct FancyGlyphs;

impl GlyphSet for FancyGlyphs {
    fn tile_char(&self, typ: TileType) -> char {
        match typ {
            TileType::Wall => '█',
            TileType::Floor => '·',
            TileType::Door => '▒',
            TileType::StairsUp => '▲',
            TileType::StairsDown => '▼',
            TileType::Empty => ' ',
        }
    }
}

/// Detect if the terminal supports Unicode/UTF-8.
pub fn supports_unicode() -> bool {
    for var in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Ok(val) = std::env::var(var) {
            let val = val.to_uppercase();
            if val.contains("UTF-8") || val.contains("UTF8") {
                return true;
            }
        }
    }
    false
}

/// Returns the glyph set for a mode, probing the terminal for `Auto`.
pub fn detect_glyph_set(mode: GraphicsMode) -> Box<dyn GlyphSet> {
    match mode {
        GraphicsMode::Classic => Box::new(ClassicGlyphs),
        GraphicsMode::Fancy => Box::new(FancyGlyphs),
        GraphicsMode::Auto => {
            if supports_unicode() {
                Box::new(FancyGlyphs)
            } else {
                Box::new(ClassicGlyphs)
            }
        }
    }
}
