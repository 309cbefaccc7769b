use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use engine::{CurrencyCode, HttpRateSource, JsonFileStore, Workflow};

use crate::{
    config::AppConfig,
    error::Result,
    ui::{self, keymap::AppAction},
};

/// Which control owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    From,
    To,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    shown_at: Instant,
}

const TOAST_TTL: Duration = Duration::from_millis(2500);

impl ToastState {
    fn new(message: String, level: ToastLevel) -> Self {
        Self {
            message,
            level,
            shown_at: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_TTL
    }
}

/// Presentation-side state the renderer needs beyond the workflow.
#[derive(Debug)]
pub struct UiState {
    pub focus: Field,
    pub dark_mode: bool,
    pub toast: Option<ToastState>,
    pub base_url: String,
}

pub struct App {
    workflow: Workflow<HttpRateSource, JsonFileStore>,
    pub ui: UiState,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let source = HttpRateSource::new(&config.base_url)?;
        let store = JsonFileStore::new(&config.favorites_path);
        let workflow = Workflow::new(
            source,
            store,
            CurrencyCode::from(config.from.as_str()),
            CurrencyCode::from(config.to.as_str()),
            config.amount.clone(),
        )?;

        Ok(Self {
            workflow,
            ui: UiState {
                focus: Field::Amount,
                dark_mode: config.theme.eq_ignore_ascii_case("dark"),
                toast: None,
                base_url: config.base_url.clone(),
            },
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        self.workflow.load_currencies().await;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            if self.ui.toast.as_ref().is_some_and(ToastState::expired) {
                self.ui.toast = None;
            }

            terminal.draw(|frame| ui::render(frame, self.workflow.state(), &self.ui))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key).await,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        match ui::keymap::map_key(key) {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::Cancel => {
                self.ui.toast = None;
            }
            AppAction::NextField => {
                self.advance_focus();
            }
            AppAction::Submit => {
                self.workflow.convert().await;
            }
            AppAction::Backspace => {
                if self.ui.focus == Field::Amount {
                    let mut amount = self.workflow.state().amount.clone();
                    amount.pop();
                    self.workflow.set_amount(amount);
                }
            }
            AppAction::Up => self.step_selection(-1),
            AppAction::Down => self.step_selection(1),
            AppAction::Input(ch) => self.handle_char(ch),
            AppAction::None => {}
        }
    }

    fn advance_focus(&mut self) {
        self.ui.focus = match self.ui.focus {
            Field::Amount => Field::From,
            Field::From => Field::To,
            Field::To => Field::Amount,
        };
    }

    fn handle_char(&mut self, ch: char) {
        // Digits and separators feed the amount field; everything else
        // stays a command key.
        if self.ui.focus == Field::Amount && (ch.is_ascii_digit() || ch == '.' || ch == ',') {
            let mut amount = self.workflow.state().amount.clone();
            amount.push(ch);
            self.workflow.set_amount(amount);
            return;
        }

        match ch {
            'q' | 'Q' => {
                self.should_quit = true;
            }
            's' | 'S' => {
                self.workflow.swap();
            }
            't' | 'T' => {
                self.ui.dark_mode = !self.ui.dark_mode;
            }
            'f' | 'F' => {
                self.toggle_favorite();
            }
            'j' | 'J' => self.step_selection(1),
            'k' | 'K' => self.step_selection(-1),
            _ => {}
        }
    }

    fn toggle_favorite(&mut self) {
        let code = match self.ui.focus {
            Field::From => self.workflow.state().from.clone(),
            Field::To => self.workflow.state().to.clone(),
            Field::Amount => return,
        };

        match self.workflow.toggle_favorite(&code) {
            Ok(true) => self.toast(format!("{code} added to favorites"), ToastLevel::Success),
            Ok(false) => self.toast(format!("{code} removed from favorites"), ToastLevel::Success),
            Err(err) => {
                tracing::warn!("favorites save failed: {err}");
                self.toast("Could not save favorites.".to_string(), ToastLevel::Error);
            }
        }
    }

    /// Moves the focused selector to the previous/next option in
    /// favorites-first order, wrapping at both ends.
    fn step_selection(&mut self, delta: i64) {
        let state = self.workflow.state();
        let options = state.favorites.selection_order(&state.currencies);
        if options.is_empty() {
            return;
        }

        let current = match self.ui.focus {
            Field::From => state.from.clone(),
            Field::To => state.to.clone(),
            Field::Amount => return,
        };

        let next = match options.iter().position(|code| *code == current) {
            Some(index) => {
                let len = options.len() as i64;
                let wrapped = (index as i64 + delta).rem_euclid(len) as usize;
                options[wrapped].clone()
            }
            None => options[0].clone(),
        };

        match self.ui.focus {
            Field::From => self.workflow.select_from(next),
            Field::To => self.workflow.select_to(next),
            Field::Amount => {}
        }
    }

    fn toast(&mut self, message: String, level: ToastLevel) {
        self.ui.toast = Some(ToastState::new(message, level));
    }
}
