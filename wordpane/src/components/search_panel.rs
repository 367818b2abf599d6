use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use tracing::{debug, info};

use crate::action::Action;
use crate::components::ResultCard;
use crate::model::LookupResult;
use crate::theme::ThemeMode;

const RANDOM_WORD_ERROR: &str = "Error while fetching random word data";

/// The root component: owns the search input, the error message, the theme
/// and the (at most one) result card, and decides which fetches to issue.
///
/// The startup random-word fetch is request generation 0; every submitted
/// search bumps the generation. Responses carry the generation they were
/// issued with and are discarded when a newer request has been made since.
pub struct SearchPanel {
    input: String,
    card: Option<ResultCard>,
    error: Option<String>,
    theme: ThemeMode,
    generation: u64,
    in_flight: bool,
}

impl SearchPanel {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            input: String::new(),
            card: None,
            error: None,
            theme,
            generation: 0,
            in_flight: false,
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn results(&self) -> Vec<&LookupResult> {
        self.card.iter().map(|card| card.result()).collect()
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(Action::Quit),
            KeyCode::Char('t') if ctrl => Some(Action::ToggleTheme),
            KeyCode::Char('e') if ctrl => {
                if let Some(card) = &mut self.card {
                    card.open_details();
                }
                None
            }
            KeyCode::Esc => {
                if let Some(card) = &mut self.card {
                    card.close_details();
                }
                None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }

    fn submit(&mut self) -> Option<Action> {
        if self.in_flight {
            debug!("a lookup is already in flight, ignoring submit");
            return None;
        }
        // An empty or whitespace-only input is a no-op: no fetch, and the
        // current results and error stay as they are.
        if self.input.trim().is_empty() {
            return None;
        }
        self.error = None;
        self.generation += 1;
        self.in_flight = true;
        info!("looking up {:?}", self.input);
        Some(Action::FetchDefinition {
            generation: self.generation,
            // The word is sent as typed, untrimmed.
            word: self.input.clone(),
        })
    }

    pub fn update(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
            }
            Action::RandomWordLoaded { generation, entry } => {
                if generation == self.generation {
                    self.card = Some(ResultCard::new(LookupResult::from_random(entry)));
                } else {
                    debug!("discarding stale random word response");
                }
            }
            Action::RandomWordFailed { generation } => {
                // A failed random fetch keeps whatever was displayed before.
                if generation == self.generation {
                    self.error = Some(RANDOM_WORD_ERROR.to_string());
                }
            }
            Action::DefinitionLoaded { generation, entry } => {
                if generation == self.generation {
                    self.in_flight = false;
                    self.card = Some(ResultCard::new(LookupResult::from_word(*entry)));
                } else {
                    debug!("discarding stale lookup response");
                }
            }
            Action::DefinitionFailed { generation, word } => {
                if generation == self.generation {
                    self.in_flight = false;
                    self.error = Some(format!("Error while fetching details for word {word}"));
                    self.card = None;
                }
            }
            _ => {}
        }
        None
    }

    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let palette = self.theme.palette();
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ],
        )
        .split(area);

        let header = Line::from(vec![
            Span::styled("Dictionary", Style::default().fg(palette.heading).bold()),
            Span::raw("  "),
            Span::styled(self.theme.icon(), Style::default().fg(palette.accent)),
        ]);
        f.render_widget(Paragraph::new(header), layout[0]);

        let input = Paragraph::new(self.input.as_str())
            .style(Style::default().fg(palette.heading))
            .block(Block::bordered().title("Search a word"));
        f.render_widget(input, layout[1]);

        if let Some(error) = &self.error {
            let error_line =
                Paragraph::new(error.as_str()).style(Style::default().fg(palette.error));
            f.render_widget(error_line, layout[2]);
        }

        if let Some(card) = &self.card {
            card.draw(f, layout[3], self.theme);
        }

        let status = if self.in_flight { "Searching…  " } else { "" };
        let footer = Paragraph::new(format!(
            "{status}enter: search  ctrl-t: theme  ctrl-e: details  esc: close  ctrl-c: quit"
        ))
        .style(Style::default().fg(palette.body));
        f.render_widget(footer, layout[4]);

        if let Some(card) = &self.card {
            if card.details_open() {
                card.draw_details(f, area, self.theme);
            }
        }
    }
}
