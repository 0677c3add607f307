// aura-fit-tui/src/ui/status_bar.rs
use crate::{
    app::{ActiveModal, App},
    ui::theme,
};
use aura_fit_lib::ViewState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.active_modal {
        ActiveModal::None => match app.session.current_view() {
            ViewState::Dashboard => " [↑↓/jk] Nav | [Enter] Iniciar | [n] Novo | [?] Ajuda | [q] Sair ",
            ViewState::Builder if app.is_text_entry() => {
                " [Enter] Gerar | [Tab] Sugestão | [Esc] Voltar | [F1-F4] Telas "
            }
            ViewState::Builder => " [s] Salvar | [d] Descartar | [?] Ajuda | [q] Sair ",
            ViewState::Stats | ViewState::Profile => " [1-4] Telas | [?] Ajuda | [q] Sair ",
            ViewState::WorkoutPlayer | ViewState::Onboarding => " [1] Início | [q] Sair ",
        },
        ActiveModal::Help => " [Esc/Enter/?] Fechar Ajuda ",
        ActiveModal::Alert { .. } => " [Esc/Enter] OK ",
    };

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let bar = Style::default().bg(theme::MUTED);
    let status_paragraph = Paragraph::new(status_text).style(bar.fg(Color::White));
    f.render_widget(status_paragraph, status_chunks[0]);

    let (message, style) = match (&app.last_error, &app.status_notice) {
        (Some(error), _) => (error.as_str(), bar.fg(Color::Red)),
        (None, Some(notice)) => (notice.as_str(), bar.patch(theme::accent_style(app.accent))),
        (None, None) => ("", bar),
    };
    let message_paragraph = Paragraph::new(message)
        .style(style)
        .alignment(Alignment::Right);
    f.render_widget(message_paragraph, status_chunks[1]);
}
