//src/view.rs
use strum_macros::{Display, EnumIter};

// Every screen the shell can show. WorkoutPlayer and Onboarding are
// declared for the immersive mode but nothing navigates to them yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ViewState {
    Dashboard,
    Builder,
    Stats,
    Profile,
    WorkoutPlayer,
    Onboarding,
}

impl ViewState {
    /// The views exposed by the bottom navigation bar, in display order.
    pub const NAVIGABLE: [ViewState; 4] = [
        ViewState::Dashboard,
        ViewState::Builder,
        ViewState::Stats,
        ViewState::Profile,
    ];

    /// Immersive views hide the navigation bar and the footer.
    pub const fn is_immersive(self) -> bool {
        matches!(self, ViewState::WorkoutPlayer | ViewState::Onboarding)
    }

    /// Label shown in the navigation bar, `None` for views it does not expose.
    pub const fn nav_label(self) -> Option<&'static str> {
        match self {
            ViewState::Dashboard => Some("Início"),
            ViewState::Builder => Some("Criar"),
            ViewState::Stats => Some("Progresso"),
            ViewState::Profile => Some("Perfil"),
            ViewState::WorkoutPlayer | ViewState::Onboarding => None,
        }
    }

    pub fn nav_index(self) -> Option<usize> {
        Self::NAVIGABLE.iter().position(|v| *v == self)
    }
}

/// Single source of truth for what is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    current: ViewState,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self {
            current: ViewState::Dashboard,
        }
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn current(&self) -> ViewState {
        self.current
    }

    pub fn navigate(&mut self, target: ViewState) {
        if self.current != target {
            tracing::debug!(from = %self.current, to = %target, "navigate");
        }
        self.current = target;
    }

    pub const fn is_immersive(&self) -> bool {
        self.current.is_immersive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_player_and_onboarding_are_immersive() {
        let immersive: Vec<ViewState> = ViewState::iter().filter(|v| v.is_immersive()).collect();
        assert_eq!(
            immersive,
            vec![ViewState::WorkoutPlayer, ViewState::Onboarding]
        );
    }

    #[test]
    fn navigable_views_have_labels_and_indices() {
        for (i, view) in ViewState::NAVIGABLE.iter().enumerate() {
            assert!(view.nav_label().is_some());
            assert_eq!(view.nav_index(), Some(i));
            assert!(!view.is_immersive());
        }
        assert_eq!(ViewState::WorkoutPlayer.nav_index(), None);
        assert_eq!(ViewState::Onboarding.nav_label(), None);
    }

    #[test]
    fn router_starts_on_dashboard() {
        assert_eq!(ViewRouter::new().current(), ViewState::Dashboard);
    }
}
