// aura-fit-tui/src/ui/layout.rs
use crate::{
    app::{ActiveModal, App},
    ui::{
        builder::render_builder,
        dashboard::render_dashboard,
        modals::render_modal,
        nav_bar::render_nav_bar,
        placeholders::{render_immersive_placeholder, render_profile, render_stats},
        status_bar::render_status_bar,
    },
};
use aura_fit_lib::ViewState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

// Width of the phone-like column the views are drawn in
const SHELL_MAX_WIDTH: u16 = 64;

// Main UI rendering function
pub fn render_ui(f: &mut Frame, app: &mut App) {
    let shell = shell_column(f.size());
    let immersive = app.session.router().is_immersive();

    // Content on top, navigation bar (unless immersive), status bar at bottom
    let constraints = if immersive {
        vec![Constraint::Min(0), Constraint::Length(1)]
    } else {
        vec![
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(shell);

    render_main_content(f, app, chunks[0]);
    if immersive {
        render_status_bar(f, app, chunks[1]);
    } else {
        render_nav_bar(f, app, chunks[1]);
        render_status_bar(f, app, chunks[2]);
    }

    // Render modal last if active
    if app.active_modal != ActiveModal::None {
        render_modal(f, app);
    }
}

// Render the content area based on the current view
fn render_main_content(f: &mut Frame, app: &mut App, area: Rect) {
    match app.session.current_view() {
        ViewState::Dashboard => render_dashboard(f, app, area),
        ViewState::Builder => render_builder(f, app, area),
        ViewState::Stats => render_stats(f, area),
        ViewState::Profile => render_profile(f, app, area),
        view @ (ViewState::WorkoutPlayer | ViewState::Onboarding) => {
            render_immersive_placeholder(f, view, area);
        }
    }
}

/// Centers a column no wider than `SHELL_MAX_WIDTH`.
pub fn shell_column(area: Rect) -> Rect {
    let width = area.width.min(SHELL_MAX_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Helper function to create a centered rectangle for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
