//src/builder.rs
use std::sync::atomic::{AtomicU64, Ordering};

use crate::generator::{Error as GenerateError, Goal};
use crate::model::Workout;

/// Canned goals offered below the input box.
pub const SUGGESTIONS: [&str; 4] = [
    "HIIT 20 min em casa",
    "Peito e Tríceps Avançado",
    "Yoga para iniciantes",
    "Glúteos sem equipamento",
];

// Process-wide so tickets stay unique across sessions
static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one generation request. Results whose ticket is not the one
/// in flight are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GenerationTicket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight(GenerationTicket),
    Succeeded(Workout), // Generated but not yet saved
    Failed(String),     // User-facing message
}

/// Input and request state of the AI workout builder.
#[derive(Debug, Clone, Default)]
pub struct BuilderState {
    prompt: String,
    request: RequestState,
    selected_suggestion: Option<usize>,
}

impl BuilderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub const fn request(&self) -> &RequestState {
        &self.request
    }

    pub const fn is_busy(&self) -> bool {
        matches!(self.request, RequestState::InFlight(_))
    }

    /// The trigger is enabled only when idle-ish and the prompt has text.
    pub fn can_generate(&self) -> bool {
        !self.is_busy() && !self.has_result() && Goal::new(&self.prompt).is_some()
    }

    pub const fn has_result(&self) -> bool {
        matches!(self.request, RequestState::Succeeded(_))
    }

    pub fn generated(&self) -> Option<&Workout> {
        match &self.request {
            RequestState::Succeeded(workout) => Some(workout),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.request {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub const fn selected_suggestion(&self) -> Option<usize> {
        self.selected_suggestion
    }

    pub fn set_prompt(&mut self, text: &str) {
        if !self.is_busy() {
            self.prompt = text.to_string();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_busy() {
            self.prompt.push(c);
            self.selected_suggestion = None;
        }
    }

    pub fn pop_char(&mut self) {
        if !self.is_busy() {
            self.prompt.pop();
            self.selected_suggestion = None;
        }
    }

    /// Replaces the prompt with suggestion `index`. Out of range is ignored.
    pub fn apply_suggestion(&mut self, index: usize) {
        if let Some(suggestion) = SUGGESTIONS.get(index) {
            if !self.is_busy() {
                self.prompt = (*suggestion).to_string();
                self.selected_suggestion = Some(index);
            }
        }
    }

    /// Applies the next suggestion, wrapping around.
    pub fn cycle_suggestion(&mut self) {
        let next = self
            .selected_suggestion
            .map_or(0, |i| (i + 1) % SUGGESTIONS.len());
        self.apply_suggestion(next);
    }

    /// Moves to `InFlight` and returns what the request needs. Returns
    /// `None` without touching anything when a request is already out, a
    /// result is waiting to be saved or discarded, or the prompt is blank.
    pub fn begin_generation(&mut self) -> Option<(GenerationTicket, Goal)> {
        if self.is_busy() || self.has_result() {
            return None;
        }
        let goal = Goal::new(&self.prompt)?;
        let ticket = GenerationTicket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed));
        self.request = RequestState::InFlight(ticket);
        Some((ticket, goal))
    }

    /// Records the outcome of request `ticket`. Returns the user-facing
    /// message on failure. Stale tickets are ignored and return `None`.
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket,
        result: Result<Workout, GenerateError>,
    ) -> Option<String> {
        if self.request != RequestState::InFlight(ticket) {
            tracing::debug!(?ticket, "dropping stale generation result");
            return None;
        }
        match result {
            Ok(workout) => {
                self.request = RequestState::Succeeded(workout);
                None
            }
            Err(e) => {
                let message = e.user_message();
                self.request = RequestState::Failed(message.clone());
                Some(message)
            }
        }
    }

    /// Hands the pending workout over and resets the builder.
    pub fn take_generated(&mut self) -> Option<Workout> {
        match std::mem::take(&mut self.request) {
            RequestState::Succeeded(workout) => {
                self.reset_input();
                Some(workout)
            }
            other => {
                self.request = other;
                None
            }
        }
    }

    /// Drops the pending workout and returns to the empty input form.
    pub fn discard(&mut self) {
        if self.has_result() {
            self.request = RequestState::Idle;
            self.reset_input();
        }
    }

    fn reset_input(&mut self) {
        self.prompt.clear();
        self.selected_suggestion = None;
    }
}
