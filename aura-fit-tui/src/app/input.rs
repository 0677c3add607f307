// aura-fit-tui/src/app/input.rs
use super::state::{ActiveModal, App};
use anyhow::Result;
use aura_fit_lib::ViewState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// Main key event handler method on App
impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        // The fallback screen only offers reload
        if self.render_fault.is_some() {
            match key.code {
                KeyCode::Char('r') | KeyCode::Enter => self.reload(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return Ok(());
        }

        if self.active_modal != ActiveModal::None {
            self.handle_modal_input(key);
            return Ok(());
        }

        // F-keys switch views even while typing
        if let KeyCode::F(n @ 1..=4) = key.code {
            self.navigate(ViewState::NAVIGABLE[usize::from(n) - 1]);
            return Ok(());
        }

        if self.is_text_entry() {
            self.handle_builder_text_input(key);
            return Ok(());
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.active_modal = ActiveModal::Help,
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.navigate(ViewState::NAVIGABLE[index]);
            }
            _ => {
                // Delegate to view-specific handler
                match self.session.current_view() {
                    ViewState::Dashboard => self.handle_dashboard_input(key),
                    ViewState::Builder => self.handle_builder_result_input(key),
                    ViewState::Stats
                    | ViewState::Profile
                    | ViewState::WorkoutPlayer
                    | ViewState::Onboarding => {}
                }
            }
        }
        Ok(())
    }

    /// True when keystrokes go into the goal text box.
    pub fn is_text_entry(&self) -> bool {
        self.session.current_view() == ViewState::Builder && !self.session.builder().has_result()
    }

    fn handle_modal_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.active_modal = ActiveModal::None;
            }
            _ => {} // Ignore other keys while a modal is open
        }
    }

    fn handle_dashboard_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => self.dashboard_previous(),
            KeyCode::Char('j') | KeyCode::Down => self.dashboard_next(),
            KeyCode::Enter | KeyCode::Char('p') => self.start_selected_workout(),
            KeyCode::Char('n') => self.navigate(ViewState::Builder),
            _ => {}
        }
    }

    fn handle_builder_text_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.start_generation(),
            KeyCode::Esc => self.navigate(ViewState::Dashboard),
            KeyCode::Tab => self.session.builder_mut().cycle_suggestion(),
            KeyCode::Backspace => self.session.builder_mut().pop_char(),
            KeyCode::Char(c) => self.session.builder_mut().push_char(c),
            _ => {}
        }
    }

    fn handle_builder_result_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') | KeyCode::Enter => self.save_generated_workout(),
            KeyCode::Char('d') | KeyCode::Esc => self.discard_generated_workout(),
            _ => {}
        }
    }
}
