//! Key help widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Widget listing the key bindings and the stair color legend
pub struct HelpWidget<'a> {
    theme: &'a Theme,
}

impl<'a> HelpWidget<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Style::default().fg(self.theme.text);
        let lines = [
            Line::from(vec![
                Span::styled("SPACE: Generate new dungeon", text),
                Span::raw("  "),
                Span::styled("UP/DOWN: Change room count", text),
                Span::raw("  "),
                Span::styled("q: Quit", text),
            ]),
            Line::from(vec![
                Span::styled("Red: Entrance", Style::default().fg(self.theme.map_entrance)),
                Span::raw("  "),
                Span::styled("Green: Exit", Style::default().fg(self.theme.map_exit)),
            ]),
        ];

        for (row, line) in lines.iter().enumerate().take(area.height as usize) {
            buf.set_line(area.x, area.y + row as u16, line, area.width);
        }
    }
}
