// aura-fit-tui/src/ui/modals.rs
use crate::{
    app::{ActiveModal, App},
    ui::layout::centered_rect,
};
use ratatui::{
    layout::Margin,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_modal(f: &mut Frame, app: &App) {
    match &app.active_modal {
        ActiveModal::Help => render_help_modal(f),
        ActiveModal::Alert { title, message } => render_alert_modal(f, title, message),
        ActiveModal::None => {}
    }
}

fn render_help_modal(f: &mut Frame) {
    let block = Block::default()
        .title("Ajuda (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().yellow());
    let area = centered_rect(80, 80, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let help_text = vec![
        Line::from("--- Geral ---").style(Style::new().bold().underlined()),
        Line::from(" F1-F4: Trocar de tela (sempre)"),
        Line::from(" 1-4: Trocar de tela (fora da digitação)"),
        Line::from(" q: Sair   Ctrl-C: Sair (sempre)"),
        Line::from(" ?: Mostrar/Esconder Ajuda"),
        Line::from(""),
        Line::from("--- Início (F1) ---").style(Style::new().bold().underlined()),
        Line::from(" k/j / ↑/↓: Navegar nos treinos"),
        Line::from(" Enter: Iniciar treino selecionado"),
        Line::from(" n: Criar novo treino"),
        Line::from(""),
        Line::from("--- Criar (F2) ---").style(Style::new().bold().underlined()),
        Line::from(" Digite o objetivo e pressione Enter"),
        Line::from(" Tab: Próxima sugestão rápida"),
        Line::from(" Esc: Voltar ao início"),
        Line::from(" s: Salvar treino gerado   d/Esc: Descartar"),
        Line::from(""),
        Line::from(Span::styled(
            " Pressione Esc, ? ou Enter para fechar ",
            Style::new().italic().yellow(),
        )),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    f.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn render_alert_modal(f: &mut Frame, title: &str, message: &str) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().red());
    let area = centered_rect(70, 30, f.size());
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(" [Enter] OK ", Style::new().italic().yellow())),
    ];
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: true }).block(block);
    f.render_widget(paragraph, area);
}
