//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use dg_core::dungeon::{DungeonState, Position as GridPos};

use crate::display::GlyphSet;
use crate::theme::Theme;

const ENTRANCE_LABEL: &str = "ENTRANCE";
const EXIT_LABEL: &str = "EXIT";

/// Widget for rendering the dungeon map
pub struct MapWidget<'a> {
    state: &'a DungeonState,
    theme: &'a Theme,
    glyphs: &'a dyn GlyphSet,
}

impl<'a> MapWidget<'a> {
    pub fn new(state: &'a DungeonState, theme: &'a Theme, glyphs: &'a dyn GlyphSet) -> Self {
        Self {
            state,
            theme,
            glyphs,
        }
    }

    /// Write `label` centered on the row above `marker`, clipped to `inner`
    fn draw_label(&self, inner: Rect, buf: &mut Buffer, marker: GridPos, label: &str, color: Color) {
        let Some(row) = marker.y.checked_sub(1) else {
            return;
        };
        let col = marker.x.saturating_sub(label.len() / 2);
        if row >= inner.height as usize || col >= inner.width as usize {
            return;
        }
        let max_width = inner.width as usize - col;
        buf.set_stringn(
            inner.x + col as u16,
            inner.y + row as u16,
            label,
            max_width,
            Style::default().fg(color).bold(),
        );
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title("Dungeon");

        let inner = block.inner(area);
        block.render(area, buf);

        let grid = self.state.grid();
        for y in 0..grid.height().min(inner.height as usize) {
            for x in 0..grid.width().min(inner.width as usize) {
                let Some(typ) = grid.typ(x, y) else {
                    continue;
                };
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + y as u16))
                {
                    cell.set_char(self.glyphs.tile_char(typ));
                    cell.set_style(Style::default().fg(self.theme.tile_color(typ)));
                }
            }
        }

        if let Some(entrance) = self.state.entrance() {
            self.draw_label(inner, buf, entrance, ENTRANCE_LABEL, self.theme.map_entrance);
        }
        // A degenerate run puts both markers on the same tile; keep the entrance label.
        if let Some(exit) = self.state.exit()
            && self.state.entrance() != Some(exit)
        {
            self.draw_label(inner, buf, exit, EXIT_LABEL, self.theme.map_exit);
        }
    }
}
