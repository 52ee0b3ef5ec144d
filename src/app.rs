use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::types::UserStats;
use crate::error::StatsError;
use crate::presenter::ProgressPresenter;
use crate::validate::validate_username;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Searching,
}

/// A lookup the event loop should run. `seq` identifies it when it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub seq: u64,
    pub username: String,
}

#[derive(Debug)]
pub struct LookupOutcome {
    pub seq: u64,
    pub result: Result<UserStats, StatsError>,
}

pub enum AppAction {
    None,
    Quit,
    Lookup(LookupTicket),
}

pub struct App {
    pub phase: Phase,
    pub input: String,
    pub presenter: ProgressPresenter,
    /// Replaces the results in the stats area when set.
    pub error_message: Option<String>,
    /// Blocking notice for rejected input; swallows keys until dismissed.
    pub notice: Option<String>,
    pub spinner_frame: usize,
    last_seq: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            input: String::new(),
            presenter: ProgressPresenter::new(),
            error_message: None,
            notice: None,
            spinner_frame: 0,
            last_seq: 0,
        }
    }

    pub fn is_search_enabled(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "Search",
            Phase::Searching => "Searching...",
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppAction::Quit;
        }

        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notice = None;
            }
            return AppAction::None;
        }

        match key.code {
            KeyCode::Esc => AppAction::Quit,
            KeyCode::Enter => {
                if !self.is_search_enabled() {
                    return AppAction::None;
                }
                match self.submit() {
                    Some(ticket) => AppAction::Lookup(ticket),
                    None => AppAction::None,
                }
            }
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.input.push(c);
                AppAction::None
            }
            KeyCode::Backspace => {
                self.input.pop();
                AppAction::None
            }
            _ => AppAction::None,
        }
    }

    /// Validates the current input and, if accepted, enters `Searching` with a
    /// cleared stats area. Rejected input opens the notice and stays `Idle`.
    pub fn submit(&mut self) -> Option<LookupTicket> {
        if let Err(invalid) = validate_username(&self.input) {
            tracing::debug!(input = %self.input, reason = %invalid, "rejected username");
            self.notice = Some(invalid.to_string());
            return None;
        }

        self.phase = Phase::Searching;
        self.presenter.reset();
        self.error_message = None;
        self.last_seq += 1;

        tracing::info!(seq = self.last_seq, username = %self.input, "starting lookup");
        Some(LookupTicket {
            seq: self.last_seq,
            username: self.input.clone(),
        })
    }

    /// Applies a finished lookup. Outcomes from a superseded lookup are dropped.
    pub fn complete(&mut self, outcome: LookupOutcome) {
        if outcome.seq != self.last_seq {
            tracing::debug!(seq = outcome.seq, latest = self.last_seq, "discarding stale lookup");
            return;
        }

        match outcome.result {
            Ok(stats) => self.presenter.render(&stats),
            Err(err) => {
                tracing::warn!(seq = outcome.seq, error = %err, "lookup failed");
                self.error_message = Some(err.to_string());
            }
        }
        self.phase = Phase::Idle;
    }

    pub fn tick(&mut self) {
        if self.phase == Phase::Searching {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
