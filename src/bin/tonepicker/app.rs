//! The notification tone settings panel

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    DefaultTerminal, Frame,
};

use tonekit::{play_tone, SoundId, SOUND_PRESETS};

pub struct App {
    /// Cursor position in the list
    list_state: ListState,
    /// The chosen tone
    selected: SoundId,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
            selected: SoundId::Classic,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(id) = self.handle_key(key.code) {
                            play_tone(id);
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn cursor(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    /// Apply a key press. Returns the tone to preview, if any.
    fn handle_key(&mut self, key: KeyCode) -> Option<SoundId> {
        let last = SOUND_PRESETS.len() - 1;
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_state.select(Some(self.cursor().saturating_sub(1)));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list_state.select(Some((self.cursor() + 1).min(last)));
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = SOUND_PRESETS[self.cursor()].id;
                tracing::debug!(sound = %id, "tone selected");
                self.selected = id;
                return Some(id);
            }
            _ => {}
        }
        None
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(7),    // Tone list
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        let items: Vec<ListItem> = SOUND_PRESETS
            .iter()
            .map(|preset| {
                let mark = if preset.id == self.selected { "✓ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, Style::default().fg(Color::Green)),
                    Span::styled(
                        format!("{:<12}", preset.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(preset.description, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Soundscape / Notification Tone ")
                    .borders(Borders::ALL),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[0], &mut self.list_state);

        let help = Paragraph::new(" [↑/↓] Move  [Enter] Select & preview  [Q] Quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[1]);
    }
}
