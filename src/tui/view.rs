//! Pure rendering: map App state to ratatui widget trees.
//!
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal buffer.
//! The triangle is projected afresh on every frame from the stored
//! classification and the current canvas size, so nothing stale survives
//! a resize or an edit.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::project::project;
use crate::report::describe;
use crate::types::{Point2D, Projection, Viewport};

use super::state::{App, FieldId};
use super::theme;

/// Braille dots per terminal cell, horizontally and vertically.
const DOTS_X: f64 = 2.0;
const DOTS_Y: f64 = 4.0;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // title, fields, result label, drawing, help
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    frame.render_widget(render_title(), chunks[0]);
    render_fields(app, frame, chunks[1]);
    frame.render_widget(render_result(app), chunks[2]);
    render_drawing(app, frame, chunks[3]);
    frame.render_widget(render_help(), chunks[4]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("triangles", theme::STYLE_TITLE),
        Span::styled("  enter three side lengths", theme::STYLE_DIM),
    ]))
}

fn render_help() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        "[0-9 .] type  [Tab/↓] next  [Shift-Tab/↑] prev  [←/→] move  [^U] clear  [Esc] quit",
        theme::STYLE_HELP,
    ))
}

// ============================================================================
// INPUT FIELDS
// ============================================================================

fn render_fields(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

    for id in FieldId::ALL {
        let rect = columns[id.index()];
        let field = app.field(id);
        let focused = app.focus == id;

        let border_style = if focused {
            theme::STYLE_FOCUSED
        } else {
            theme::STYLE_UNFOCUSED
        };
        let block = Block::bordered()
            .title(format!(" {} ", id.label()))
            .border_style(border_style);

        let (scroll, column) = field_window(field.cursor, rect.width.saturating_sub(2));
        let paragraph = Paragraph::new(field.text.as_str())
            .block(block)
            .scroll((0, scroll));
        frame.render_widget(paragraph, rect);

        if focused {
            // Inside the left border, clamped to the box.
            let max_x = rect.x.saturating_add(rect.width.saturating_sub(2));
            let x = rect.x.saturating_add(1).saturating_add(column).min(max_x);
            frame.set_cursor_position((x, rect.y.saturating_add(1)));
        }
    }
}

/// Horizontal scroll and cursor column for a one-line field `inner` cells wide.
///
/// Text scrolls only once the cursor would pass the last visible cell.
/// Field text is ASCII, so the byte cursor is also a cell offset.
pub fn field_window(cursor: usize, inner: u16) -> (u16, u16) {
    let last = usize::from(inner.saturating_sub(1));
    let offset = cursor.saturating_sub(last);
    let scroll = u16::try_from(offset).unwrap_or(u16::MAX);
    let column = u16::try_from(cursor - offset).unwrap_or(u16::MAX);
    (scroll, column)
}

fn render_result(app: &App) -> Paragraph<'static> {
    let category = app.classification.category;
    Paragraph::new(Span::styled(describe(category), theme::result_style(category)))
}

// ============================================================================
// DRAWING
// ============================================================================

/// Viewport in braille-dot units for a canvas of `area`.
///
/// The result label sits above the canvas, so free space starts at the
/// canvas's top edge (anchor 0).
pub fn canvas_viewport(area: Rect) -> Viewport {
    Viewport::new(
        f64::from(area.width) * DOTS_X,
        f64::from(area.height) * DOTS_Y,
        0.0,
    )
}

fn render_drawing(app: &App, frame: &mut Frame, area: Rect) {
    let Some(sides) = app.classification.sides else {
        return;
    };
    if area.width == 0 || area.height == 0 {
        return;
    }

    let viewport = canvas_viewport(area);
    let projection = project(sides, &viewport, app.classification.category);
    let fill = theme::category_color(app.classification.category);
    let outline = theme::outline_color();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, viewport.width])
        .y_bounds([0.0, viewport.height])
        .paint(move |ctx| paint_triangle(ctx, &projection, viewport.height, fill, outline));

    frame.render_widget(canvas, area);
}

/// Fill with horizontal scanlines, then stroke the three edges.
///
/// Projected points are y-down; the canvas is y-up, so y is flipped
/// against the surface height.
fn paint_triangle(ctx: &mut Context, projection: &Projection, height: f64, fill: Color, outline: Color) {
    let flip = |p: Point2D| Point2D::new(p.x, height - p.y);
    let [p1, p2, p3] = projection.points.map(flip);

    for (y, x_start, x_end) in scanlines(&[p1, p2, p3]) {
        ctx.draw(&CanvasLine::new(x_start, y, x_end, y, fill));
    }

    for (from, to) in [(p1, p2), (p2, p3), (p3, p1)] {
        ctx.draw(&CanvasLine::new(from.x, from.y, to.x, to.y, outline));
    }
}

/// Horizontal spans covering the triangle, one per dot row.
///
/// Each row is sampled at its centre. Returns `(y, x_start, x_end)`.
pub fn scanlines(points: &[Point2D; 3]) -> Vec<(f64, f64, f64)> {
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    if !min_y.is_finite() || !max_y.is_finite() {
        return Vec::new();
    }

    let edges = [(points[0], points[1]), (points[1], points[2]), (points[2], points[0])];
    let mut spans = Vec::new();

    let mut row = min_y.floor();
    while row <= max_y {
        let y = row + 0.5;
        let xs: Vec<f64> = edges
            .iter()
            .filter(|(p, q)| (p.y <= y && q.y > y) || (q.y <= y && p.y > y))
            .map(|(p, q)| p.x + (y - p.y) * (q.x - p.x) / (q.y - p.y))
            .collect();

        if xs.len() >= 2 {
            let x_start = xs.iter().copied().fold(f64::INFINITY, f64::min);
            let x_end = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            spans.push((y, x_start, x_end));
        }
        row += 1.0;
    }

    spans
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::category_color;
    use crate::tui::update::update;
    use crate::tui::state::Action;
    use crate::types::TriangleCategory;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn has_fg(buffer: &Buffer, color: Color) -> bool {
        buffer.content().iter().any(|cell| cell.fg == color)
    }

    #[test]
    fn empty_app_renders_invalid_label() {
        let mut terminal = make_terminal();
        let app = App::new();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(terminal.backend().buffer());
        assert!(content.contains("These side lengths produce an invalid triangle."));
    }

    #[test]
    fn valid_app_renders_label_and_fields() {
        let mut terminal = make_terminal();
        let app = App::with_values(["3", "4", "5"]);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(terminal.backend().buffer());
        assert!(content.contains("a valid right triangle."));
        assert!(content.contains(" a "));
        assert!(content.contains(" c "));
    }

    #[test]
    fn valid_triangle_is_drawn_in_category_color() {
        let mut terminal = make_terminal();
        let app = App::with_values(["2", "2", "3"]);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let fill = category_color(TriangleCategory::Isosceles);
        assert!(has_fg(terminal.backend().buffer(), fill), "fill color missing");
    }

    #[test]
    fn invalid_triangle_draws_nothing() {
        let mut terminal = make_terminal();
        let app = App::with_values(["1", "2", "10"]);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        for category in [
            TriangleCategory::Scalene,
            TriangleCategory::Isosceles,
            TriangleCategory::Equilateral,
            TriangleCategory::Right,
            TriangleCategory::RightIsosceles,
        ] {
            assert!(!has_fg(buffer, category_color(category)));
        }
    }

    #[test]
    fn edit_replaces_previous_drawing() {
        let mut terminal = make_terminal();
        let mut app = App::with_values(["5", "5", "5"]);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let equilateral = category_color(TriangleCategory::Equilateral);
        assert!(has_fg(terminal.backend().buffer(), equilateral));

        update(&mut app, Action::PrevField);
        update(&mut app, Action::Backspace);
        update(&mut app, Action::Insert('8'));
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        assert!(!has_fg(buffer, equilateral), "old shape still visible");
        assert!(has_fg(buffer, category_color(TriangleCategory::Isosceles)));
    }

    #[test]
    fn identical_state_renders_identically() {
        let app = App::with_values(["7", "8", "9"]);
        let mut first = make_terminal();
        let mut second = make_terminal();
        first.draw(|frame| render(&app, frame)).unwrap();
        second.draw(|frame| render(&app, frame)).unwrap();
        assert_eq!(first.backend().buffer(), second.backend().buffer());
    }

    #[test]
    fn tiny_terminal_renders_without_panic() {
        for (w, h) in [(1, 1), (10, 3), (20, 6)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            let app = App::with_values(["3", "4", "5"]);
            terminal
                .draw(|frame| render(&app, frame))
                .expect("render should not panic");
        }
    }

    #[test]
    fn fill_matches_projected_color() {
        let app = App::with_values(["3", "4", "5"]);
        let sides = app.classification.sides.unwrap();
        let projection = project(sides, &Viewport::default(), app.classification.category);

        assert_eq!(
            category_color(app.classification.category),
            theme::to_color(projection.color)
        );
    }

    #[test]
    fn short_field_does_not_scroll() {
        assert_eq!(field_window(0, 10), (0, 0));
        assert_eq!(field_window(9, 10), (0, 9));
    }

    #[test]
    fn long_field_scrolls_to_keep_cursor_visible() {
        assert_eq!(field_window(10, 10), (1, 9));
        assert_eq!(field_window(300, 24), (277, 23));
    }

    #[test]
    fn field_window_survives_huge_cursor_and_no_room() {
        assert_eq!(field_window(70_000, 24), (u16::MAX, 23));
        assert_eq!(field_window(5, 0), (5, 0));
    }

    #[test]
    fn long_field_keeps_cursor_and_tail_inside_box() {
        let mut terminal = make_terminal();
        let text = format!("{}7", "1".repeat(300));
        let app = App::with_values([text.as_str(), "4", "5"]);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        // Field a is the first third of an 80-column row of fields.
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.y, 2);
        assert!(cursor.x >= 1 && cursor.x < 26, "cursor at {cursor:?}");

        let content = buffer_text(terminal.backend().buffer());
        assert!(content.contains('7'), "tail of long field not shown");
    }

    #[test]
    fn canvas_viewport_uses_braille_resolution() {
        let v = canvas_viewport(Rect::new(0, 5, 40, 10));
        assert_eq!(v.width, 80.0);
        assert_eq!(v.height, 40.0);
        assert_eq!(v.anchor_y, 0.0);
    }

    #[test]
    fn scanlines_cover_triangle_rows() {
        let points = [
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(5.0, 10.0),
        ];
        let spans = scanlines(&points);
        assert_eq!(spans.len(), 10);

        // Bottom row is nearly the full base, top row is narrow.
        let (_, first_start, first_end) = spans[0];
        let (_, last_start, last_end) = spans[spans.len() - 1];
        assert!(first_end - first_start > 9.0);
        assert!(last_end - last_start < 1.0);

        for (_, start, end) in spans {
            assert!(start <= end);
            assert!(start >= 0.0 && end <= 10.0);
        }
    }

    #[test]
    fn scanlines_of_flat_triangle_are_empty() {
        let points = [
            Point2D::new(0.0, 3.2),
            Point2D::new(10.0, 3.2),
            Point2D::new(5.0, 3.2),
        ];
        assert!(scanlines(&points).is_empty());
    }
}
