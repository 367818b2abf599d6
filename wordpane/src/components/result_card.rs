use ratatui::{prelude::*, widgets::*};

use crate::model::LookupResult;
use crate::theme::ThemeMode;

/// Renders one lookup result: the word and its summary definition, plus an
/// expandable detail view with pronunciations and the full meanings.
///
/// A card is built fresh whenever the owning result changes, so the detail
/// view always starts closed.
pub struct ResultCard {
    result: LookupResult,
    details_open: bool,
}

impl ResultCard {
    pub fn new(result: LookupResult) -> Self {
        Self {
            result,
            details_open: false,
        }
    }

    pub fn result(&self) -> &LookupResult {
        &self.result
    }

    pub fn details_open(&self) -> bool {
        self.details_open
    }

    /// Opens the detail view. Only possible when the trigger is visible,
    /// which is keyed on the phonetics list being present at all — an empty
    /// list still counts (matching the original behavior).
    pub fn open_details(&mut self) {
        if self.result.phonetics.is_some() {
            self.details_open = true;
        }
    }

    pub fn close_details(&mut self) {
        self.details_open = false;
    }

    pub fn draw(&self, f: &mut Frame<'_>, area: Rect, theme: ThemeMode) {
        let palette = theme.palette();
        let mut lines = vec![
            Line::styled(
                self.result.word.clone(),
                Style::default().fg(palette.heading).bold(),
            ),
            Line::raw(""),
            Line::styled(
                self.result.definition.clone(),
                Style::default().fg(palette.body),
            ),
        ];
        if self.result.phonetics.is_some() {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "[ More Details (ctrl-e) ]",
                Style::default().fg(palette.accent),
            ));
        }
        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().border_style(Style::default().fg(palette.accent)));
        f.render_widget(card, area);
    }

    /// Draws the detail view as a centered modal over the whole frame.
    pub fn draw_details(&self, f: &mut Frame<'_>, area: Rect, theme: ThemeMode) {
        let palette = theme.palette();
        let mut lines = Vec::new();
        if let Some(phonetics) = &self.result.phonetics {
            for phonetic in phonetics {
                // Entries without an audio url are skipped entirely.
                if let Some(audio) = &phonetic.audio {
                    if !audio.is_empty() {
                        lines.push(Line::from(vec![
                            Span::styled("▶ ", Style::default().fg(palette.accent)),
                            Span::styled(audio.clone(), Style::default().fg(palette.body)),
                        ]));
                    }
                }
            }
        }
        if let Some(meanings) = &self.result.meanings {
            for meaning in meanings {
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    format!("Part Of Speech: {}", meaning.part_of_speech),
                    Style::default().fg(palette.heading).bold(),
                ));
                lines.push(Line::styled(
                    "Definitions",
                    Style::default().fg(palette.heading),
                ));
                for definition in &meaning.definitions {
                    lines.push(Line::styled(
                        format!("  {}", definition.definition),
                        Style::default().fg(palette.body),
                    ));
                }
            }
        }

        let modal_area = centered_rect(70, 70, area);
        f.render_widget(Clear, modal_area);
        let modal = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::bordered()
                .title("More Details (esc to close)")
                .border_style(Style::default().fg(palette.accent)),
        );
        f.render_widget(modal, modal_area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::new(
        Direction::Vertical,
        [
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ],
    )
    .split(area);
    let horizontal = Layout::new(
        Direction::Horizontal,
        [
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ],
    )
    .split(vertical[1]);
    horizontal[1]
}
