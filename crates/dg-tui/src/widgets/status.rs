//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use dg_core::GenerationReport;

use crate::theme::Theme;

/// Widget for rendering the room count and last run summary
pub struct StatusWidget<'a> {
    target_rooms: usize,
    report: Option<&'a GenerationReport>,
    connected: bool,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(
        target_rooms: usize,
        report: Option<&'a GenerationReport>,
        connected: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            target_rooms,
            report,
            connected,
            theme,
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        // Line 1: target room count
        let line1 = format!("Rooms: {} (UP/DOWN to change)", self.target_rooms);
        buf.set_stringn(
            area.x,
            area.y,
            &line1,
            area.width as usize,
            Style::default().fg(self.theme.text),
        );

        if area.height < 2 {
            return;
        }

        // Line 2: what the last run produced
        let mut spans = Vec::new();
        if let Some(report) = self.report {
            spans.push(Span::styled(
                format!(
                    "Placed: {}/{} Skipped: {} Seed: {}",
                    report.placed_rooms, report.target_rooms, report.skipped_rooms, report.seed
                ),
                Style::default().fg(self.theme.text_dim),
            ));
            if self.connected {
                spans.push(Span::styled(
                    " Connected",
                    Style::default().fg(self.theme.text_dim),
                ));
            } else {
                spans.push(Span::styled(
                    " Disconnected",
                    Style::default().fg(self.theme.bad),
                ));
            }
            if report.degenerate {
                spans.push(Span::styled(
                    " No exit room",
                    Style::default().fg(self.theme.bad),
                ));
            }
        }
        buf.set_line(area.x, area.y + 1, &Line::from(spans), area.width);
    }
}
