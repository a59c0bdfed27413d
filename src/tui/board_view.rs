//! Board rendering into styled text lines.

use gridline_core::{Board, Cell, GlyphSet, Player, Position, column_of};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Styles the `|a b c|` rows of [`GlyphSet::text_rows`], highlighting the cursor cell.
pub fn board_lines(board: &Board, glyphs: &GlyphSet, cursor: Option<Position>) -> Vec<Line<'static>> {
    let frame_style = Style::default().fg(Color::DarkGray);

    glyphs
        .text_rows(board)
        .into_iter()
        .zip(board.rows())
        .enumerate()
        .map(|(y, (text, row))| {
            let mut cells = row.iter().enumerate().peekable();
            let spans: Vec<Span<'static>> = text
                .chars()
                .enumerate()
                .map(|(column, glyph)| match cells.next_if(|&(x, _)| column_of(x) == column) {
                    Some((x, &cell)) => {
                        let mut style = cell_style(cell);
                        if cursor == Some(Position::new(x, y)) {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        Span::styled(glyph.to_string(), style)
                    }
                    None if glyph == '|' => Span::styled("|", frame_style),
                    None => Span::raw(glyph.to_string()),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Blocked | Cell::Path => Style::default().fg(Color::DarkGray),
        Cell::Empty => Style::default(),
        Cell::Mark(Player::Cross) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Mark(Player::Nought) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_match_text_rows() {
        let board = Board::default();
        let glyphs = GlyphSet::default();
        let lines = board_lines(&board, &glyphs, Some(Position::new(1, 1)));
        let rendered: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(rendered, glyphs.text_rows(&board));
    }

    #[test]
    fn test_cursor_cell_reversed() {
        let board = Board::rectangle(2, 1);
        let lines = board_lines(&board, &GlyphSet::default(), Some(Position::new(1, 0)));
        // "|", cell 0, " ", cell 1, "|"
        let span = &lines[0].spans[3];
        assert!(span.style.add_modifier.contains(Modifier::REVERSED));
        assert!(!lines[0].spans[1].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_bar_glyph_still_styled_as_cell() {
        let board = Board::from_mask(&[[false, true]]);
        let glyphs = GlyphSet {
            blocked: '|',
            ..GlyphSet::default()
        };
        let lines = board_lines(&board, &glyphs, None);
        assert_eq!(lines[0].to_string(), "||  |");
        assert_eq!(lines[0].spans[1].style, cell_style(Cell::Blocked));
        assert_eq!(lines[0].spans[0].style, Style::default().fg(Color::DarkGray));
        assert_eq!(lines[0].spans.len(), 5);
    }
}
