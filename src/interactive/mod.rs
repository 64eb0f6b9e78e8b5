use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::PickerResult;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::{
    cache_service::CacheService,
    clipboard_service::{ClipboardService, ClipboardSink},
};
use self::constants::EVENT_POLL_INTERVAL_MS;
use self::domain::{dataset::Dataset, models::Outcome};
use self::ui::{
    app_state::{AppState, Focus, LoadStatus},
    commands::Command,
    components::Component,
    events::Message,
    keymap,
    renderer::Renderer,
    theme::Theme,
};

/// Runs one picker session: loads the dataset in the background, drives the
/// state machine from terminal input and executes the commands it emits.
pub struct EmojiPicker<C: ClipboardSink = ClipboardService> {
    state: AppState,
    renderer: Renderer,
    cache: Arc<CacheService>,
    clipboard: C,
    loader: Option<Receiver<PickerResult<Dataset>>>,
    should_quit: bool,
    selected: Option<String>,
}

impl EmojiPicker<ClipboardService> {
    pub fn new(config: Config, cache: CacheService, theme: Theme) -> Self {
        Self::with_clipboard(config, cache, theme, ClipboardService::new())
    }
}

impl<C: ClipboardSink> EmojiPicker<C> {
    pub fn with_clipboard(config: Config, cache: CacheService, theme: Theme, clipboard: C) -> Self {
        Self {
            state: AppState::new(config),
            renderer: Renderer::new(theme),
            cache: Arc::new(cache),
            clipboard,
            loader: None,
            should_quit: false,
            selected: None,
        }
    }

    pub fn run(&mut self) -> Result<Outcome> {
        self.start_loader();

        let mut terminal = self.setup_terminal()?;
        let result = self.run_app(&mut terminal);
        self.cleanup_terminal(&mut terminal)?;
        result?;

        Ok(self.outcome())
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.poll_loader();
            if self.should_quit {
                break;
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_input(key);
                }
            }
            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Spawn the one-shot dataset load. Its result arrives via `poll_loader`.
    fn start_loader(&mut self) {
        let (tx, rx) = mpsc::channel();
        let cache = self.cache.clone();
        debug!("Loading dataset from {}", cache.data_dir().display());

        thread::spawn(move || {
            let result = cache.load();
            let _ = tx.send(result);
        });

        self.loader = Some(rx);
    }

    /// Turn a finished load into a `DatasetLoaded` message. Never blocks.
    fn poll_loader(&mut self) {
        let Some(receiver) = &self.loader else {
            return;
        };

        match receiver.try_recv() {
            Ok(result) => {
                self.loader = None;
                self.handle_message(Message::DatasetLoaded(result));
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                error!("Dataset loader exited without a result");
                self.loader = None;
            }
        }
    }

    fn handle_input(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let focus = self.state.focus;
        match keymap::resolve(&key, focus) {
            Some(resolved) => {
                // Arrows still move the text cursor while typing
                if resolved.is_directional() && focus == Focus::Query {
                    self.renderer.get_search_bar_mut().handle_key(key);
                }
                self.handle_message(Message::Key(resolved));
            }
            None if focus == Focus::Query => {
                if let Some(msg) = self.renderer.get_search_bar_mut().handle_key(key) {
                    self.handle_message(msg);
                }
            }
            None => {}
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            Command::CopyToClipboard(emoji) => {
                match self.clipboard.copy(&emoji) {
                    Ok(()) => info!("Copied {emoji} to clipboard"),
                    Err(e) => warn!("Clipboard copy failed: {e:#}"),
                }
                self.selected = Some(emoji);
            }
            Command::Batch(commands) => {
                for command in commands {
                    self.execute_command(command);
                }
            }
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.state.status == LoadStatus::Error {
            return Outcome::Failed(self.state.error.clone().unwrap_or_default());
        }
        match &self.selected {
            Some(emoji) => Outcome::Selected(emoji.clone()),
            None => Outcome::Cancelled,
        }
    }
}
