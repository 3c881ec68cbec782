use notepalette_core::highlight::Segment;
use notepalette_core::notes::Field;
use notepalette_core::search::SearchHit;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, PLACEHOLDER};

const PANEL_MAX_WIDTH: u16 = 72;
const RESULTS_MAX_HEIGHT: u16 = 18;
const INDENT: &str = "  ";

fn mark_style() -> Style {
    Style::default().bg(Color::Yellow).fg(Color::Black)
}

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // --- PAGE SHELL ---
    let footer_row = Rect { y: area.bottom().saturating_sub(1), height: 1.min(area.height), ..area };
    f.render_widget(
        Paragraph::new(app.footer()).alignment(Alignment::Right).dark_gray(),
        footer_row,
    );
    if let Some(status) = &app.status {
        f.render_widget(Paragraph::new(status.as_str()).gray(), footer_row);
    }

    if app.palette.is_open() {
        draw_palette(f, app, area);
    }
}

fn draw_palette(f: &mut Frame, app: &App, area: Rect) {
    let width = PANEL_MAX_WIDTH.min(area.width.saturating_sub(4)).max(10);
    let inner_width = width.saturating_sub(2) as usize;

    // The active row is styled on the item so highlight colors still win.
    let items: Vec<ListItem> = app
        .palette
        .results()
        .iter()
        .enumerate()
        .map(|(i, hit)| {
            let item = ListItem::new(result_text(hit, inner_width));
            if i == app.palette.active() {
                item.style(Style::default().bg(Color::DarkGray))
            } else {
                item
            }
        })
        .collect();
    let body_lines: u16 = items.iter().map(|i| i.height() as u16).sum();
    let body_height = body_lines.clamp(1, RESULTS_MAX_HEIGHT);

    // Top-anchored like a dialog with generous padding.
    let top = (area.height / 8).max(1);
    let height = (body_height + 4).min(area.height.saturating_sub(top + 1));
    let panel = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + top,
        width: width.min(area.width),
        height,
    };

    f.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input
            Constraint::Length(1), // Separator
            Constraint::Min(1),    // Results
        ])
        .split(inner);

    // --- INPUT ---
    let term = app.palette.term();
    // Prompt takes two cells and the cursor one; longer terms scroll left.
    let visible = input_tail(term, (chunks[0].width as usize).saturating_sub(3));
    let input = if term.is_empty() {
        Line::from(vec![Span::raw("❯ ").bold(), Span::raw(PLACEHOLDER).dark_gray()])
    } else {
        Line::from(vec![Span::raw("❯ ").bold(), Span::raw(visible).white()])
    };
    f.render_widget(Paragraph::new(input), chunks[0]);
    let cursor_x = chunks[0].x + 2 + visible.chars().count() as u16;
    f.set_cursor_position((cursor_x.min(chunks[0].right().saturating_sub(1)), chunks[0].y));

    f.render_widget(
        Paragraph::new("─".repeat(chunks[1].width as usize)).dark_gray(),
        chunks[1],
    );

    // --- RESULTS ---
    if items.is_empty() {
        f.render_widget(Paragraph::new(" no notes found.").gray(), chunks[2]);
        return;
    }

    let list = List::new(items);
    let mut state = ListState::default().with_selected(Some(app.palette.active()));
    f.render_stateful_widget(list, chunks[2], &mut state);
}

/// The last `width` characters of `term`.
fn input_tail(term: &str, width: usize) -> &str {
    let skip = term.chars().count().saturating_sub(width);
    match term.char_indices().nth(skip) {
        Some((i, _)) => &term[i..],
        None => "",
    }
}

/// Title line plus wrapped content lines for one result.
fn result_text(hit: &SearchHit, width: usize) -> Text<'static> {
    let text_width = width.saturating_sub(INDENT.len()).max(1);

    let title_style = Style::default().add_modifier(Modifier::BOLD).fg(Color::White);
    let mut lines = Vec::new();
    let mut title = vec![Span::raw(INDENT)];
    title.extend(segment_spans(&hit.segments(Field::Title), title_style));
    lines.push(Line::from(title));

    let content_style = Style::default().fg(Color::Gray);
    for line in wrap_spans(segment_spans(&hit.segments(Field::Content), content_style), text_width) {
        let mut spans = vec![Span::raw(INDENT)];
        spans.extend(line);
        lines.push(Line::from(spans));
    }

    Text::from(lines)
}

fn segment_spans(segments: &[Segment<'static>], base: Style) -> Vec<Span<'static>> {
    segments
        .iter()
        .map(|s| {
            let style = if s.is_highlighted() { base.patch(mark_style()) } else { base };
            Span::styled(s.text, style)
        })
        .collect()
}

/// Hard-wraps styled spans at `width` characters, keeping each piece's style.
fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Vec<Span<'static>>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for span in spans {
        let mut piece = String::new();
        for c in span.content.chars() {
            if used == width {
                if !piece.is_empty() {
                    current.push(Span::styled(std::mem::take(&mut piece), span.style));
                }
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            piece.push(c);
            used += 1;
        }
        if !piece.is_empty() {
            current.push(Span::styled(piece, span.style));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use notepalette_core::config::PaletteConfig;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn empty_palette_shows_placeholder_and_no_results() {
        let app = App::new(&PaletteConfig::default());
        let screen = rows(&render(&app)).join("\n");
        assert!(screen.contains(PLACEHOLDER));
        assert!(screen.contains("no notes found."));
        assert!(screen.contains(&app.footer()));
    }

    #[test]
    fn results_are_listed_with_highlights() {
        let mut app = App::new(&PaletteConfig::default());
        type_text(&mut app, "chicken");
        let buffer = render(&app);
        let screen = rows(&buffer).join("\n");
        assert!(screen.contains("Grocery List"));
        assert!(!screen.contains("no notes found."));

        let area = buffer.area;
        let marked: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .filter(|&pos| buffer[pos].bg == Color::Yellow)
            .map(|pos| buffer[pos].symbol().to_string())
            .collect();
        assert!(marked.starts_with("Chicken"), "highlighted cells: {marked}");
    }

    #[test]
    fn closed_palette_leaves_only_the_page() {
        let mut app = App::new(&PaletteConfig::default());
        app.palette.toggle();
        let screen = rows(&render(&app)).join("\n");
        assert!(!screen.contains(PLACEHOLDER));
        assert!(!screen.contains("no notes found."));
        assert!(screen.contains(&app.footer()));
    }

    #[test]
    fn long_terms_scroll_to_show_the_tail() {
        let mut app = App::new(&PaletteConfig::default());
        let term: String = std::iter::once('\'')
            .chain(('a'..='z').chain('A'..='Z').cycle().take(81))
            .collect();
        type_text(&mut app, &term);

        let tail: String = term.chars().skip(term.chars().count() - 30).collect();
        let screen = rows(&render(&app));
        let input_row = screen.iter().find(|row| row.contains('❯')).unwrap();
        assert!(input_row.contains(&tail), "input row: {input_row}");
        assert!(!input_row.contains('\''));
    }

    #[test]
    fn input_tail_counts_characters() {
        assert_eq!(input_tail("abc", 5), "abc");
        assert_eq!(input_tail("abcdef", 3), "def");
        assert_eq!(input_tail("çàéü", 2), "éü");
        assert_eq!(input_tail("abc", 0), "");
    }

    #[test]
    fn wrapping_keeps_styles_and_text() {
        let spans = vec![
            Span::raw("abcd"),
            Span::styled("efgh", mark_style()),
            Span::raw("ij"),
        ];
        let lines = wrap_spans(spans, 3);
        let texts: Vec<String> = lines
            .iter()
            .map(|l| l.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(texts, vec!["abc", "def", "ghi", "j"]);
        assert_eq!(lines[1][1].style, mark_style());
    }
}
