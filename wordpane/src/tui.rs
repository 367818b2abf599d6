use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use futures::{FutureExt, StreamExt};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

const TICK_RATE: f64 = 4.0;
const FRAME_RATE: f64 = 30.0;

#[derive(Debug, Clone)]
pub enum Event {
    Error,
    Tick,
    Render,
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Raw-mode/alternate-screen guard around the terminal, with an async reader
/// task that multiplexes crossterm events with tick and frame intervals.
pub struct Tui {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
    task: JoinHandle<()>,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal,
            task: tokio::spawn(async {}),
            event_rx,
            event_tx,
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        self.start();
        Ok(())
    }

    fn start(&mut self) {
        let tick_delay = Duration::from_secs_f64(1.0 / TICK_RATE);
        let render_delay = Duration::from_secs_f64(1.0 / FRAME_RATE);
        let event_tx = self.event_tx.clone();
        self.task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_delay);
            let mut render_interval = tokio::time::interval(render_delay);
            loop {
                let crossterm_event = reader.next().fuse();
                tokio::select! {
                    maybe_event = crossterm_event => {
                        match maybe_event {
                            Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                                let _ = event_tx.send(Event::Key(key));
                            }
                            Some(Ok(CrosstermEvent::Resize(width, height))) => {
                                let _ = event_tx.send(Event::Resize(width, height));
                            }
                            Some(Ok(_)) => {}
                            Some(Err(_)) => {
                                let _ = event_tx.send(Event::Error);
                            }
                            None => break,
                        }
                    }
                    _ = tick_interval.tick() => {
                        let _ = event_tx.send(Event::Tick);
                    }
                    _ = render_interval.tick() => {
                        let _ = event_tx.send(Event::Render);
                    }
                }
            }
        });
    }

    pub fn exit(&mut self) -> Result<()> {
        self.task.abort();
        if crossterm::terminal::is_raw_mode_enabled()? {
            crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
            crossterm::terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
