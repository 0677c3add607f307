// aura-fit-tui/src/ui/placeholders.rs
use crate::{app::App, ui::theme};
use aura_fit_lib::ViewState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_stats(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Estatísticas em Breve",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Seu progresso aparecerá aqui.",
            theme::muted(),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Progresso "));
    f.render_widget(paragraph, area);
}

pub fn render_profile(f: &mut Frame, app: &App, area: Rect) {
    let profile = &app.config.profile;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let summary = Paragraph::new(vec![
        Line::from(Span::styled(
            profile.name.clone(),
            theme::accent_bold(app.accent),
        )),
        Line::from(Span::styled(
            format!("Membro desde {}", profile.member_since),
            theme::muted(),
        )),
        Line::from(format!("Objetivo: {}", profile.goal)),
        Line::from(format!("Nível: {}", profile.level)),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Perfil "));
    f.render_widget(summary, chunks[0]);

    // Static rows, nothing here is editable yet
    let settings = Paragraph::new(vec![
        Line::from("Notificações"),
        Line::from("Privacidade"),
        Line::from("Ajuda e Suporte"),
        Line::from(""),
        Line::from(Span::styled(
            format!("Modelo: {}", app.config.gemini.model),
            theme::muted(),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title(" Configurações "));
    f.render_widget(settings, chunks[1]);
}

pub fn render_immersive_placeholder(f: &mut Frame, view: ViewState, area: Rect) {
    let title = match view {
        ViewState::WorkoutPlayer => "Player de Treino",
        ViewState::Onboarding => "Boas-vindas",
        _ => "",
    };
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Em construção. [1] Início", theme::muted())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
