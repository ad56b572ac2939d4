//! Chess board rendering.

use crate::game::{Piece, PieceKind, Side};
use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};
use shakmaty::{File, Rank, Square};

const LIGHT_SQUARE: Color = Color::Rgb(240, 217, 181);
const DARK_SQUARE: Color = Color::Rgb(181, 136, 99);

/// Renders the 8x8 board with rank/file labels, cursor and selection.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 28, 9);
    let position = app.session().position();

    let mut lines: Vec<Line> = Vec::with_capacity(9);
    for rank in (0..8).rev() {
        let mut spans = vec![Span::styled(
            format!("{} ", rank + 1),
            Style::default().fg(Color::DarkGray),
        )];
        for file in 0..8 {
            let square = Square::from_coords(File::new(file), Rank::new(rank));
            let piece = position.piece_at(square);
            let text = match piece {
                Some(piece) => format!(" {} ", glyph(piece)),
                None => "   ".to_string(),
            };
            let mut style = Style::default().bg(square_background(square, app));
            if let Some(piece) = piece {
                style = style.fg(match piece.side {
                    Side::User => Color::White,
                    Side::Bot => Color::Black,
                });
            }
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        "   a  b  c  d  e  f  g  h",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(Text::from(lines)), board_area);
}

fn square_background(square: Square, app: &App) -> Color {
    if app.selected() == Some(square) {
        return Color::Green;
    }
    if app.cursor() == square {
        return Color::Yellow;
    }
    let file = u32::from(square.file());
    let rank = u32::from(square.rank());
    if (file + rank) % 2 == 1 {
        LIGHT_SQUARE
    } else {
        DARK_SQUARE
    }
}

fn glyph(piece: Piece) -> char {
    match (piece.side, piece.kind) {
        (Side::User, PieceKind::King) => '♔',
        (Side::User, PieceKind::Queen) => '♕',
        (Side::User, PieceKind::Rook) => '♖',
        (Side::User, PieceKind::Bishop) => '♗',
        (Side::User, PieceKind::Knight) => '♘',
        (Side::User, PieceKind::Pawn) => '♙',
        (Side::Bot, PieceKind::King) => '♚',
        (Side::Bot, PieceKind::Queen) => '♛',
        (Side::Bot, PieceKind::Rook) => '♜',
        (Side::Bot, PieceKind::Bishop) => '♝',
        (Side::Bot, PieceKind::Knight) => '♞',
        (Side::Bot, PieceKind::Pawn) => '♟',
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
