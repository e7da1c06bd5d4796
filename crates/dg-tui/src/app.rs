//! Application state and main UI controller

use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use dg_core::dungeon::all_rooms_reachable;
use dg_core::{DungeonError, DungeonGenerator, DungeonState, GenerationReport};

use crate::display::{self, GlyphSet, GraphicsMode};
use crate::input::{Command, key_to_command};
use crate::theme::Theme;
use crate::widgets::{HelpWidget, MapWidget, StatusWidget};

/// Viewer state: the generator, the requested room count and the last run
pub struct App {
    generator: DungeonGenerator,
    target_rooms: usize,
    report: Option<GenerationReport>,
    connected: bool,
    should_quit: bool,
    theme: Theme,
    glyph_set: Box<dyn GlyphSet>,
}

impl App {
    /// Create the app and run the first generation
    ///
    /// `target_rooms` is clamped to the generator's configured range.
    pub fn new(
        generator: DungeonGenerator,
        target_rooms: usize,
        theme: Theme,
        graphics_mode: GraphicsMode,
    ) -> Result<Self, DungeonError> {
        let target_rooms = generator.config().clamp_room_count(target_rooms);
        let mut app = Self {
            generator,
            target_rooms,
            report: None,
            connected: false,
            should_quit: false,
            theme,
            glyph_set: display::detect_glyph_set(graphics_mode),
        };
        app.regenerate()?;
        Ok(app)
    }

    pub fn state(&self) -> &DungeonState {
        self.generator.state()
    }

    pub fn report(&self) -> Option<&GenerationReport> {
        self.report.as_ref()
    }

    pub fn target_rooms(&self) -> usize {
        self.target_rooms
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run a fresh generation with the current room count
    pub fn regenerate(&mut self) -> Result<&GenerationReport, DungeonError> {
        let report = self.generator.generate(self.target_rooms)?;
        self.connected = all_rooms_reachable(self.generator.state());
        Ok(self.report.insert(report))
    }

    /// Move the room count by `delta` and regenerate if it changed
    fn adjust_rooms(&mut self, delta: isize) -> Result<(), DungeonError> {
        let stepped = self
            .generator
            .config()
            .step_room_count(self.target_rooms, delta);
        if stepped != self.target_rooms {
            self.target_rooms = stepped;
            self.regenerate()?;
        }
        Ok(())
    }

    /// Handle a terminal event
    pub fn handle_event(&mut self, event: Event) -> Result<(), DungeonError> {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
            && let Some(command) = key_to_command(key)
        {
            self.execute(command)?;
        }
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<(), DungeonError> {
        match command {
            Command::Regenerate => {
                self.regenerate()?;
            }
            Command::MoreRooms => self.adjust_rooms(1)?,
            Command::FewerRooms => self.adjust_rooms(-1)?,
            Command::Quit => self.should_quit = true,
        }
        Ok(())
    }

    pub fn render(&self, frame: &mut Frame) {
        // Layout: map at top, status, then key help
        let map_height = self.generator.config().grid_height as u16 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(map_height), // Map + border
                Constraint::Length(2),       // Status lines
                Constraint::Length(2),       // Help
            ])
            .split(frame.area());

        let map_widget = MapWidget::new(self.state(), &self.theme, self.glyph_set.as_ref());
        frame.render_widget(map_widget, chunks[0]);

        let status_widget = StatusWidget::new(
            self.target_rooms,
            self.report.as_ref(),
            self.connected,
            &self.theme,
        );
        frame.render_widget(status_widget, chunks[1]);

        frame.render_widget(HelpWidget::new(&self.theme), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use dg_core::GeneratorConfig;

    fn app(target: usize) -> App {
        let generator = DungeonGenerator::with_seed(GeneratorConfig::default(), 42).unwrap();
        App::new(generator, target, Theme::dark(), GraphicsMode::Classic).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
            .unwrap();
    }

    #[test]
    fn test_new_generates_immediately() {
        let app = app(10);
        assert_eq!(app.target_rooms(), 10);
        assert!(app.report().is_some());
        assert!(app.state().room_count() >= 1);
        assert!(app.connected);
    }

    #[test]
    fn test_new_clamps_target() {
        assert_eq!(app(1).target_rooms(), 5);
        assert_eq!(app(500).target_rooms(), 20);
    }

    #[test]
    fn test_up_down_change_count_and_regenerate() {
        let mut app = app(10);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.target_rooms(), 11);
        assert_eq!(app.report().map(|r| r.target_rooms), Some(11));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.target_rooms(), 9);
        assert_eq!(app.report().map(|r| r.target_rooms), Some(9));
    }

    #[test]
    fn test_count_stops_at_bounds() {
        let mut app = app(20);
        let before = app.state().grid().clone();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.target_rooms(), 20);
        // No regeneration at the ceiling
        assert_eq!(app.state().grid(), &before);

        let mut app = self::app(5);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.target_rooms(), 5);
    }

    #[test]
    fn test_space_regenerates() {
        let mut app = app(12);
        let before = app.state().rooms().to_vec();
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.target_rooms(), 12);
        // Same RNG stream moves on, so the layout changes
        assert_ne!(app.state().rooms(), before.as_slice());
    }

    #[test]
    fn test_quit() {
        let mut app = app(10);
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
