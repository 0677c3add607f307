// aura-fit-tui/src/ui/nav_bar.rs
use crate::{app::App, ui::theme};
use aura_fit_lib::ViewState;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

// Bottom navigation: exactly the four reachable views
pub fn render_nav_bar(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ViewState::NAVIGABLE
        .iter()
        .enumerate()
        .filter_map(|(i, view)| {
            view.nav_label()
                .map(|label| Line::from(Span::raw(format!("{label} (F{})", i + 1))))
        })
        .collect();

    let mut tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::muted()),
        )
        .style(theme::muted())
        .highlight_style(
            theme::accent_style(app.accent).add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .divider(Span::styled("│", Style::default().fg(theme::MUTED)));

    if let Some(index) = app.session.current_view().nav_index() {
        tabs = tabs.select(index);
    }
    f.render_widget(tabs, area);
}
