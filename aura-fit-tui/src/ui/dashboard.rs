// aura-fit-tui/src/ui/dashboard.rs
use crate::{app::App, ui::theme};
use aura_fit_lib::{StandardColor, Workout};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

// How many exercise names each card previews
const PREVIEW_EXERCISES: usize = 3;

pub fn render_dashboard(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    render_header(f, app, chunks[0]);
    render_workout_list(f, app, chunks[1]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let saved = app.session.workouts().len();
    let lines = vec![
        Line::from(Span::styled("Olá, Atleta", theme::accent_bold(app.accent))),
        Line::from("Pronto para o treino de hoje?"),
        Line::from(Span::styled(
            format!(
                "{} • Treinos salvos: {saved}",
                Local::now().format("%d/%m/%Y")
            ),
            theme::muted(),
        )),
    ];
    let header = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn render_workout_list(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Seus Treinos ")
        .border_style(theme::muted());

    if app.session.workouts().is_empty() {
        let empty = Paragraph::new(vec![
            Line::from("Nenhum treino criado ainda."),
            Line::from(Span::styled(
                "Pressione [n] para criar um com a IA.",
                theme::muted(),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let default_minutes = app.config.display.default_duration_minutes;
    let items: Vec<ListItem> = app
        .session
        .workouts()
        .as_slice()
        .iter()
        .map(|workout| workout_card(workout, default_minutes, app.accent))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme::MUTED)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.dashboard_list_state);
}

fn workout_card(
    workout: &Workout,
    default_minutes: u32,
    accent: StandardColor,
) -> ListItem<'static> {
    let count = workout.exercises.len();
    let mut preview: Vec<String> = workout
        .exercises
        .iter()
        .take(PREVIEW_EXERCISES)
        .map(|e| e.name.clone())
        .collect();
    if count > PREVIEW_EXERCISES {
        preview.push(format!("+ {}", count - PREVIEW_EXERCISES));
    }

    ListItem::new(vec![
        Line::from(Span::styled(
            workout.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{count} exercícios • {} min",
                workout.display_duration(default_minutes)
            ),
            theme::accent_style(accent),
        )),
        Line::from(Span::styled(preview.join(", "), theme::muted())),
        Line::from(""),
    ])
}
