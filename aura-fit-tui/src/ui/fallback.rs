// aura-fit-tui/src/ui/fallback.rs
use crate::{
    app::App,
    ui::{layout::render_ui, theme},
};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::error;

thread_local! {
    static IN_RENDER_BOUNDARY: Cell<bool> = const { Cell::new(false) };
}

/// True while the current thread is drawing inside `render_guarded`.
/// Panics raised there are recovered, so the panic hook stays quiet.
pub fn inside_render_boundary() -> bool {
    IN_RENDER_BOUNDARY.with(Cell::get)
}

/// Draws the current view, or the recovery screen once any view has panicked.
///
/// A panic while drawing is caught here so the terminal stays usable; the
/// fault sticks until the user reloads.
pub fn render_guarded(f: &mut Frame, app: &mut App) {
    guard(f, app, render_ui);
}

fn guard(f: &mut Frame, app: &mut App, render: impl FnOnce(&mut Frame, &mut App)) {
    if app.render_fault.is_none() {
        IN_RENDER_BOUNDARY.with(|flag| flag.set(true));
        let result = catch_unwind(AssertUnwindSafe(|| render(f, app)));
        IN_RENDER_BOUNDARY.with(|flag| flag.set(false));

        if let Err(payload) = result {
            let msg = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            error!(panic = %msg, view = %app.session.current_view(), "render fault");
            app.render_fault = Some(msg);
        }
    }

    if let Some(fault) = &app.render_fault {
        render_fallback(f, fault);
    }
}

fn render_fallback(f: &mut Frame, fault: &str) {
    let area = f.size();
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Algo deu errado",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from("A tela encontrou um erro inesperado."),
        Line::from(Span::styled(fault.to_string(), theme::muted())),
        Line::from(""),
        Line::from("[r] Recarregar  [q] Sair"),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use aura_fit_lib::ViewState;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_guarded(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn dashboard_lists_seed_workout() {
        let (_rt, mut app) = test_app();
        let screen = draw(&mut app, 70, 30);
        assert!(screen.contains("Olá, Atleta"));
        assert!(screen.contains("Treino Full Body"));
        assert!(screen.contains("4 exercícios • 45 min"));
        assert!(screen.contains("+ 1"));
        assert!(screen.contains("Início"));
    }

    #[test]
    fn immersive_view_hides_navigation() {
        let (_rt, mut app) = test_app();
        app.navigate(ViewState::WorkoutPlayer);
        let screen = draw(&mut app, 70, 30);
        assert!(screen.contains("Player de Treino"));
        assert!(!screen.contains("Criar (F2)"));
    }

    #[test]
    fn stats_placeholder_is_shown() {
        let (_rt, mut app) = test_app();
        app.navigate(ViewState::Stats);
        let screen = draw(&mut app, 70, 30);
        assert!(screen.contains("Estatísticas em Breve"));
    }

    #[test]
    fn panic_while_drawing_shows_fallback_until_reload() {
        let (_rt, mut app) = test_app();
        app.navigate(ViewState::Profile);
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();

        terminal
            .draw(|f| {
                guard(f, &mut app, |_, _| {
                    assert!(inside_render_boundary());
                    panic!("boom")
                })
            })
            .unwrap();
        assert!(!inside_render_boundary());
        assert_eq!(app.render_fault.as_deref(), Some("boom"));
        let screen = buffer_text(terminal.backend().buffer());
        assert!(screen.contains("Algo deu errado"));
        assert!(screen.contains("boom"));

        // The faulty renderer is not called again while the fault stands
        terminal
            .draw(|f| guard(f, &mut app, |_, _| panic!("second")))
            .unwrap();
        assert_eq!(app.render_fault.as_deref(), Some("boom"));

        app.handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE))
            .unwrap();
        assert!(app.render_fault.is_none());
        assert_eq!(app.session.current_view(), ViewState::Dashboard);
        let screen = draw(&mut app, 70, 30);
        assert!(screen.contains("Treino Full Body"));
        assert!(!screen.contains("Algo deu errado"));
    }

    #[test]
    fn formatted_panic_message_is_recorded() {
        let (_rt, mut app) = test_app();
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal
            .draw(|f| guard(f, &mut app, |_, _| panic!("index {} out of range", 7)))
            .unwrap();
        assert_eq!(app.render_fault.as_deref(), Some("index 7 out of range"));
    }

    #[test]
    fn fault_replaces_every_view() {
        let (_rt, mut app) = test_app();
        app.render_fault = Some("index out of bounds".to_string());
        let screen = draw(&mut app, 70, 20);
        assert!(screen.contains("Algo deu errado"));
        assert!(screen.contains("[r] Recarregar"));
        assert!(!screen.contains("Treino Full Body"));
    }
}
