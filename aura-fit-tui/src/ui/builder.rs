// aura-fit-tui/src/ui/builder.rs
use crate::{app::App, ui::theme};
use aura_fit_lib::{Workout, SUGGESTIONS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const PLACEHOLDER: &str = "Ex: Treino de pernas com halteres, 30 minutos...";

pub fn render_builder(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled("IA Personal", theme::accent_bold(app.accent))),
        Line::from(Span::styled(
            "Descreva seu objetivo e a IA monta o treino.",
            theme::muted(),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, chunks[0]);

    match app.session.builder().generated() {
        Some(workout) => render_result(f, app, workout, chunks[1]),
        None => render_form(f, app, chunks[1]),
    }
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let builder = app.session.builder();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Input
            Constraint::Length(1), // Button
            Constraint::Length(2), // Failure
            Constraint::Min(0),    // Suggestions
        ])
        .split(area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(" Objetivo ")
        .border_style(theme::accent_style(app.accent));
    let input = if builder.prompt().is_empty() {
        Paragraph::new(Span::styled(PLACEHOLDER, theme::muted()))
    } else {
        Paragraph::new(builder.prompt())
    };
    f.render_widget(input.wrap(Wrap { trim: false }).block(input_block), chunks[0]);

    if !builder.is_busy() {
        // Cursor after the last character, clamped to the first inner line
        let inner_width = chunks[0].width.saturating_sub(2);
        let typed = u16::try_from(builder.prompt().chars().count()).unwrap_or(u16::MAX);
        let x = chunks[0].x + 1 + typed.min(inner_width.saturating_sub(1));
        f.set_cursor(x, chunks[0].y + 1);
    }

    let button = if builder.is_busy() {
        let frame = SPINNER[(app.tick_count % SPINNER.len() as u64) as usize];
        Line::from(Span::styled(
            format!(" {frame} Criando Treino... "),
            theme::muted(),
        ))
    } else if builder.can_generate() {
        Line::from(Span::styled(
            " [Enter] Gerar Treino ",
            theme::accent_bold(app.accent).add_modifier(Modifier::REVERSED),
        ))
    } else {
        Line::from(Span::styled(" [Enter] Gerar Treino ", theme::muted()))
    };
    f.render_widget(Paragraph::new(button), chunks[1]);

    if let Some(detail) = builder.failure() {
        let failure = Paragraph::new(Span::styled(detail, Style::default().fg(Color::Red)))
            .wrap(Wrap { trim: true });
        f.render_widget(failure, chunks[2]);
    }

    let mut lines = vec![Line::from(Span::styled(
        "Sugestões rápidas [Tab]",
        theme::muted(),
    ))];
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        let style = if builder.selected_suggestion() == Some(i) {
            theme::accent_bold(app.accent)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("• {suggestion}"), style)));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[3]);
}

fn render_result(f: &mut Frame, app: &App, workout: &Workout, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        workout.title.clone(),
        theme::accent_bold(app.accent),
    ))];
    if let Some(minutes) = workout.duration_minutes {
        lines.push(Line::from(Span::styled(format!("{minutes} min"), theme::muted())));
    }
    if let Some(description) = &workout.description {
        lines.push(Line::from(description.as_str()));
    }
    lines.push(Line::from(""));

    for (i, exercise) in workout.exercises.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), theme::accent_style(app.accent)),
            Span::styled(
                exercise.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(format!(
            "   {} séries x {}",
            exercise.sets, exercise.reps
        )));
        if let Some(note) = &exercise.note {
            lines.push(Line::from(Span::styled(
                format!("   {note}"),
                theme::muted().add_modifier(Modifier::ITALIC),
            )));
        }
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Treino Gerado "));
    f.render_widget(card, chunks[0]);

    let actions = Line::from(vec![
        Span::styled(
            " [s] Salvar Treino ",
            theme::accent_bold(app.accent).add_modifier(Modifier::REVERSED),
        ),
        Span::raw("  "),
        Span::styled(" [d] Descartar ", theme::muted()),
    ]);
    f.render_widget(Paragraph::new(actions), chunks[1]);
}
