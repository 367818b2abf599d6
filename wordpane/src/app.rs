use anyhow::Result;
use dictionary::Dictionary;
use ratatui::prelude::Rect;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, warn};

use crate::action::Action;
use crate::components::SearchPanel;
use crate::theme::ThemeMode;
use crate::tui::{Event, Tui};

pub struct App {
    dictionary: Dictionary,
    search_panel: SearchPanel,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            dictionary: Dictionary::new(),
            search_panel: SearchPanel::new(ThemeMode::detect()),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = Tui::new()?;
        tui.enter()?;

        // The initial random word. It doesn't block the first render; the
        // panel fills in once the response arrives.
        action_tx.send(Action::FetchRandomWord { generation: 0 })?;

        loop {
            if let Some(event) = tui.next().await {
                match event {
                    Event::Tick => {}
                    Event::Render => action_tx.send(Action::Render)?,
                    Event::Resize(width, height) => {
                        action_tx.send(Action::Resize(width, height))?;
                    }
                    Event::Key(key) => {
                        if let Some(action) = self.search_panel.handle_key_event(key) {
                            action_tx.send(action)?;
                        }
                    }
                    Event::Error => warn!("terminal event stream error"),
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Render {
                    debug!("{action:?}");
                }
                match &action {
                    Action::Quit => self.should_quit = true,
                    Action::Resize(width, height) => {
                        tui.terminal.resize(Rect::new(0, 0, *width, *height))?;
                    }
                    Action::Render => {
                        tui.terminal.draw(|f| self.search_panel.draw(f, f.area()))?;
                    }
                    Action::FetchRandomWord { generation } => {
                        self.spawn_random_word_fetch(*generation, action_tx.clone());
                    }
                    Action::FetchDefinition { generation, word } => {
                        self.spawn_definition_fetch(*generation, word.clone(), action_tx.clone());
                    }
                    _ => {}
                }
                if let Some(follow_up) = self.search_panel.update(action) {
                    action_tx.send(follow_up)?;
                }
            }

            if self.should_quit {
                tui.exit()?;
                break;
            }
        }
        Ok(())
    }

    fn spawn_random_word_fetch(&self, generation: u64, tx: UnboundedSender<Action>) {
        let dictionary = self.dictionary.clone();
        tokio::spawn(async move {
            let action = match dictionary.get_random_word().await {
                Ok(entry) => Action::RandomWordLoaded { generation, entry },
                Err(error) => {
                    warn!("random word fetch failed: {error:?}");
                    Action::RandomWordFailed { generation }
                }
            };
            let _ = tx.send(action);
        });
    }

    fn spawn_definition_fetch(&self, generation: u64, word: String, tx: UnboundedSender<Action>) {
        let dictionary = self.dictionary.clone();
        tokio::spawn(async move {
            let action = match dictionary.get_definition(&word).await {
                Ok(entry) => Action::DefinitionLoaded {
                    generation,
                    entry: Box::new(entry),
                },
                Err(error) => {
                    warn!("lookup for {word:?} failed: {error:?}");
                    Action::DefinitionFailed { generation, word }
                }
            };
            let _ = tx.send(action);
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
