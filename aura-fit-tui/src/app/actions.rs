// aura-fit-tui/src/app/actions.rs
use super::navigation_helpers::{list_next, list_previous};
use super::state::{ActiveModal, App, GenerationOutcome};
use aura_fit_lib::{GenerateError, Session, ViewState};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

impl App {
    pub fn navigate(&mut self, target: ViewState) {
        self.session.navigate(target);
    }

    /// Spawns the generation request for the current prompt. Does nothing
    /// when the builder refuses (blank prompt or a request already out).
    pub fn start_generation(&mut self) {
        let Some((ticket, goal)) = self.session.builder_mut().begin_generation() else {
            return;
        };
        info!(?ticket, goal = goal.as_str(), "generation requested");
        let generator = Arc::clone(&self.generator);
        let tx = self.results_tx.clone();
        self.runtime.spawn(async move {
            // Inner task so a panic still reports back and unlocks the builder
            let request = tokio::spawn(async move { generator.generate(&goal).await });
            let result = match request.await {
                Ok(result) => result,
                Err(e) => {
                    error!(?ticket, error = %e, "generation task aborted");
                    Err(GenerateError::Transport(format!("generation task failed: {e}")))
                }
            };
            if let Err(e) = &result {
                warn!(?ticket, error = %e, "generation request failed");
            }
            if tx.send(GenerationOutcome { ticket, result }).is_err() {
                debug!("event loop gone before generation finished");
            }
        });
    }

    /// Applies any finished generation requests. Failures open an alert.
    pub fn poll_generation(&mut self) {
        while let Ok(outcome) = self.results_rx.try_recv() {
            if let Some(detail) = self
                .session
                .builder_mut()
                .finish_generation(outcome.ticket, outcome.result)
            {
                debug!(detail = %detail, "showing generation failure");
                self.active_modal = ActiveModal::Alert {
                    title: "Erro ao gerar treino".to_string(),
                    message: detail,
                };
            }
        }
    }

    pub fn save_generated_workout(&mut self) {
        match self.session.save_generated() {
            Ok(true) => {
                self.dashboard_list_state.select(Some(0));
                self.set_notice("Treino salvo!".to_string());
            }
            Ok(false) => {}
            Err(e) => self.set_error(e.to_string()),
        }
    }

    pub fn discard_generated_workout(&mut self) {
        self.session.discard_generated();
    }

    /// Entry point for the future player view; for now only a notice.
    pub fn start_selected_workout(&mut self) {
        let Some(index) = self.selected_workout_index() else {
            return;
        };
        if let Some(workout) = self.session.workouts().get(index) {
            info!(id = %workout.id, title = %workout.title, "starting workout");
            let notice = format!("Iniciando treino: {}", workout.title);
            self.set_notice(notice);
        }
    }

    pub fn dashboard_next(&mut self) {
        let len = self.session.workouts().len();
        list_next(&mut self.dashboard_list_state, len);
    }

    pub fn dashboard_previous(&mut self) {
        let len = self.session.workouts().len();
        list_previous(&mut self.dashboard_list_state, len);
    }

    /// Recovery from a render fault: a brand new session on the dashboard.
    /// Results of requests still in flight are dropped by ticket.
    pub fn reload(&mut self) {
        info!("reloading session after render fault");
        self.session = Session::seeded();
        self.render_fault = None;
        self.active_modal = ActiveModal::None;
        self.last_error = None;
        self.status_notice = None;
        self.message_clear_time = None;
        self.dashboard_list_state.select(Some(0));
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::test_app_with_client;
    use crate::app::ActiveModal;
    use async_trait::async_trait;
    use aura_fit_lib::{CompletionClient, GenerateError};
    use serde_json::Value;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    struct PanickingClient;

    #[async_trait]
    impl CompletionClient for PanickingClient {
        async fn complete_json(
            &self,
            _prompt: &str,
            _schema: &Value,
        ) -> Result<String, GenerateError> {
            panic!("client exploded")
        }
    }

    #[test]
    fn panicking_request_unlocks_builder() {
        let (_rt, mut app) = test_app_with_client(Arc::new(PanickingClient));
        app.session.builder_mut().set_prompt("pernas");
        app.start_generation();
        assert!(app.session.builder().is_busy());

        let deadline = Instant::now() + Duration::from_secs(5);
        while app.session.builder().is_busy() && Instant::now() < deadline {
            app.tick();
            std::thread::sleep(Duration::from_millis(10));
        }

        assert!(!app.session.builder().is_busy());
        assert!(app.session.builder().failure().is_some());
        assert!(matches!(app.active_modal, ActiveModal::Alert { .. }));
        assert!(app.session.builder().can_generate());
    }
}
