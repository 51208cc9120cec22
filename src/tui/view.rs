//! Rendering for the interactive backup list

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::{format_age, format_size};

use super::app::ListApp;

/// Render the backup list screen
pub fn render(frame: &mut Frame, app: &ListApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_help(frame, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        " Project Backups ",
        Style::default()
            .fg(Color::White)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);
}

fn render_list(frame: &mut Frame, app: &ListApp, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.backups.is_empty() {
        let empty = Paragraph::new("No backups found. Create one with: projsnap create")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .backups
        .iter()
        .map(|backup| {
            let line = Line::from(vec![
                Span::raw(format!("{:<30}", backup.display_name())),
                Span::styled(" | ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("{:>9}", format_size(backup.size))),
                Span::styled(" | ", Style::default().fg(Color::DarkGray)),
                Span::raw(format_age(&backup.created_at)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "up/down: navigate | Enter: load | r: rename | d: delete | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
