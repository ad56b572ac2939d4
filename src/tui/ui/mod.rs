//! UI rendering using ratatui.

mod board;

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub use board::render_board;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("♟ Chess Bot")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(32), Constraint::Length(34)])
        .split(chunks[1]);

    render_board(f, main[0], app);
    render_histories(f, main[1], app);

    let status_style = if app.session().status().is_over() {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else if app.awaiting_bot() {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows: move cursor | Enter: pick up / drop | Esc: cancel | R: Reset | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

/// Renders the two move-history panes beside the board.
fn render_histories(f: &mut Frame, area: Rect, app: &App) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let user_items: Vec<ListItem> = app
        .session()
        .user_moves()
        .iter()
        .enumerate()
        .map(|(i, mv)| ListItem::new(format!("{}. {}", i + 1, mv)))
        .collect();
    let user_list = List::new(user_items)
        .block(Block::default().borders(Borders::ALL).title("Your moves"));
    f.render_widget(user_list, panes[0]);

    let bot_items: Vec<ListItem> = app
        .session()
        .bot_moves()
        .iter()
        .enumerate()
        .map(|(i, mv)| match mv {
            Some(mv) => ListItem::new(format!("{}. {}", i + 1, mv)),
            None => ListItem::new(format!("{}. -", i + 1)),
        })
        .collect();
    let bot_list = List::new(bot_items)
        .block(Block::default().borders(Borders::ALL).title("Bot's moves"));
    f.render_widget(bot_list, panes[1]);
}
