// aura-fit-tui/src/app/state.rs
use aura_fit_lib::{
    parse_color, AppService, Config, GenerateError, GenerationTicket, Session, StandardColor,
    Workout, WorkoutGenerator,
};
use ratatui::widgets::ListState;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

// Represents the state of active modals
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveModal {
    None,
    Help,
    Alert { title: String, message: String },
}

/// Result of a spawned generation request, sent back to the event loop.
pub struct GenerationOutcome {
    pub ticket: GenerationTicket,
    pub result: Result<Workout, GenerateError>,
}

// Holds the application state
pub struct App {
    pub session: Session,
    pub config: Config,
    pub accent: StandardColor,
    pub should_quit: bool,
    pub active_modal: ActiveModal,
    pub last_error: Option<String>,     // Status bar, right side, red
    pub status_notice: Option<String>,  // Status bar, right side, accent
    pub message_clear_time: Option<Instant>,
    pub render_fault: Option<String>, // Set when drawing panicked
    pub tick_count: u64,

    // === Dashboard State ===
    pub dashboard_list_state: ListState,

    pub(super) generator: Arc<WorkoutGenerator>,
    pub(super) runtime: Handle,
    pub(super) results_tx: UnboundedSender<GenerationOutcome>,
    pub(super) results_rx: UnboundedReceiver<GenerationOutcome>,
}

impl App {
    pub fn new(service: &AppService, runtime: Handle) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        // Config::validate already rejected unknown names
        let accent =
            parse_color(&service.config.display.accent_color).unwrap_or(StandardColor::Green);
        let mut app = App {
            session: service.new_session(),
            config: service.config.clone(),
            accent,
            should_quit: false,
            active_modal: ActiveModal::None,
            last_error: None,
            status_notice: None,
            message_clear_time: None,
            render_fault: None,
            tick_count: 0,
            dashboard_list_state: ListState::default(),
            generator: service.generator(),
            runtime,
            results_tx,
            results_rx,
        };
        app.dashboard_list_state.select(Some(0));
        app
    }

    // Method to set status bar errors
    pub fn set_error(&mut self, msg: String) {
        self.status_notice = None;
        self.last_error = Some(msg);
        self.message_clear_time = Some(Instant::now() + MESSAGE_TIMEOUT);
    }

    pub fn set_notice(&mut self, msg: String) {
        self.last_error = None;
        self.status_notice = Some(msg);
        self.message_clear_time = Some(Instant::now() + MESSAGE_TIMEOUT);
    }

    // Clears expired status messages (called every tick)
    pub(crate) fn clear_expired_messages(&mut self) {
        if let Some(clear_time) = self.message_clear_time {
            if Instant::now() >= clear_time {
                self.last_error = None;
                self.status_notice = None;
                self.message_clear_time = None;
            }
        }
    }

    /// Called once per loop iteration before drawing.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.clear_expired_messages();
        self.poll_generation();
    }

    /// Index of the selected dashboard workout, clamped to the list.
    pub fn selected_workout_index(&self) -> Option<usize> {
        let len = self.session.workouts().len();
        self.dashboard_list_state
            .selected()
            .filter(|_| len > 0)
            .map(|i| i.min(len - 1))
    }
}
