//! State transitions: (App, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Edits pass through the sanitizer against the focused field; anything
//! it swallows leaves the App untouched. Every accepted edit reclassifies.

use crate::sanitize::{self, Keystroke};

use super::state::{Action, App, Field, Transition};

/// Apply one action to the app.
pub fn update(app: &mut App, action: Action) -> Transition {
    match action {
        Action::Quit => {
            app.should_quit = true;
            return Transition::Quit;
        }
        Action::NextField => app.focus = app.focus.next(),
        Action::PrevField => app.focus = app.focus.prev(),
        Action::CursorLeft => move_cursor(app.field_mut(app.focus), CursorMove::Left),
        Action::CursorRight => move_cursor(app.field_mut(app.focus), CursorMove::Right),
        Action::Home => move_cursor(app.field_mut(app.focus), CursorMove::Home),
        Action::End => move_cursor(app.field_mut(app.focus), CursorMove::End),
        Action::Insert(c) => edit(app, Keystroke::Char(c)),
        Action::Backspace => edit(app, Keystroke::Backspace),
        Action::Delete => edit(app, Keystroke::Delete),
        Action::ClearField => {
            let field = app.field_mut(app.focus);
            if !field.text.is_empty() {
                *field = Field::default();
                app.recompute();
            }
        }
    }
    Transition::Continue
}

// ============================================================================
// EDITING
// ============================================================================

/// Run a keystroke through the sanitizer, apply it, and reclassify if the
/// text actually changed.
fn edit(app: &mut App, key: Keystroke) {
    let field = app.field_mut(app.focus);

    if !sanitize::admits(&field.text, key) {
        log::trace!("swallowed {key:?} for field {:?}", app.focus);
        return;
    }

    if apply_keystroke(field, key) {
        app.recompute();
    }
}

/// Apply an admitted keystroke. Returns true if the text changed.
fn apply_keystroke(field: &mut Field, key: Keystroke) -> bool {
    match key {
        Keystroke::Char(c) => {
            field.text.insert(field.cursor, c);
            field.cursor += c.len_utf8();
            true
        }
        Keystroke::Backspace => {
            if field.cursor == 0 {
                return false;
            }
            field.cursor -= 1;
            field.text.remove(field.cursor);
            true
        }
        Keystroke::Delete => {
            if field.cursor >= field.text.len() {
                return false;
            }
            field.text.remove(field.cursor);
            true
        }
    }
}

enum CursorMove {
    Left,
    Right,
    Home,
    End,
}

fn move_cursor(field: &mut Field, movement: CursorMove) {
    field.cursor = match movement {
        CursorMove::Left => field.cursor.saturating_sub(1),
        CursorMove::Right => (field.cursor + 1).min(field.text.len()),
        CursorMove::Home => 0,
        CursorMove::End => field.text.len(),
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::FieldId;
    use crate::types::TriangleCategory;

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, Action::Insert(c));
        }
    }

    // -- Quit --

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Quit), Transition::Quit);
        assert!(app.should_quit);
    }

    // -- Typing --

    #[test]
    fn typing_three_fields_classifies_right_triangle() {
        let mut app = App::new();
        type_str(&mut app, "3");
        update(&mut app, Action::NextField);
        type_str(&mut app, "4");
        update(&mut app, Action::NextField);
        type_str(&mut app, "5");

        assert_eq!(app.classification.category, TriangleCategory::Right);
        assert_eq!(app.field(FieldId::C).text, "5");
    }

    #[test]
    fn letters_are_swallowed() {
        let mut app = App::new();
        type_str(&mut app, "1a2");
        assert_eq!(app.focused().text, "12");
        assert_eq!(app.focused().cursor, 2);
    }

    #[test]
    fn second_decimal_point_is_swallowed() {
        let mut app = App::new();
        type_str(&mut app, "1.5.2");
        assert_eq!(app.focused().text, "1.52");
    }

    #[test]
    fn insert_happens_at_cursor() {
        let mut app = App::with_values(["15", "", ""]);
        update(&mut app, Action::CursorLeft);
        update(&mut app, Action::Insert('2'));
        assert_eq!(app.focused().text, "125");
        assert_eq!(app.focused().cursor, 2);
    }

    // -- Deleting --

    #[test]
    fn backspace_removes_before_cursor() {
        let mut app = App::with_values(["123", "", ""]);
        update(&mut app, Action::Backspace);
        assert_eq!(app.focused().text, "12");
        assert_eq!(app.focused().cursor, 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut app = App::with_values(["12", "", ""]);
        update(&mut app, Action::Home);
        update(&mut app, Action::Backspace);
        assert_eq!(app.focused().text, "12");
        assert_eq!(app.focused().cursor, 0);
    }

    #[test]
    fn delete_removes_under_cursor() {
        let mut app = App::with_values(["123", "", ""]);
        update(&mut app, Action::Home);
        update(&mut app, Action::Delete);
        assert_eq!(app.focused().text, "23");
        assert_eq!(app.focused().cursor, 0);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut app = App::with_values(["12", "", ""]);
        update(&mut app, Action::Delete);
        assert_eq!(app.focused().text, "12");
    }

    #[test]
    fn removing_decimal_point_allows_a_new_one() {
        let mut app = App::with_values(["1.5", "", ""]);
        update(&mut app, Action::CursorLeft);
        update(&mut app, Action::Backspace);
        assert_eq!(app.focused().text, "15");
        update(&mut app, Action::End);
        update(&mut app, Action::Insert('.'));
        assert_eq!(app.focused().text, "15.");
    }

    #[test]
    fn clear_field_empties_and_reclassifies() {
        let mut app = App::with_values(["3", "4", "5"]);
        update(&mut app, Action::ClearField);
        assert!(app.focused().text.is_empty());
        assert_eq!(app.focused().cursor, 0);
        assert_eq!(app.classification.category, TriangleCategory::Invalid);
    }

    // -- Reclassification --

    #[test]
    fn editing_reclassifies_each_time() {
        let mut app = App::with_values(["2", "2", "3"]);
        assert_eq!(app.classification.category, TriangleCategory::Isosceles);

        update(&mut app, Action::PrevField); // focus c
        update(&mut app, Action::Backspace);
        assert_eq!(app.classification.category, TriangleCategory::Invalid);

        update(&mut app, Action::Insert('2'));
        assert_eq!(app.classification.category, TriangleCategory::Equilateral);
    }

    #[test]
    fn swallowed_key_keeps_classification() {
        let mut app = App::with_values(["3", "4", "5"]);
        let before = app.classification;
        update(&mut app, Action::Insert('x'));
        assert_eq!(app.classification, before);
    }

    #[test]
    fn repeated_recompute_is_stable() {
        let mut app = App::with_values(["5", "5", "7.0710678118654755"]);
        let first = app.classification;
        for _ in 0..5 {
            app.recompute();
            assert_eq!(app.classification, first);
        }
        assert_eq!(first.category, TriangleCategory::RightIsosceles);
    }

    // -- Navigation --

    #[test]
    fn cursor_moves_are_clamped() {
        let mut app = App::with_values(["12", "", ""]);
        update(&mut app, Action::CursorRight);
        assert_eq!(app.focused().cursor, 2);
        update(&mut app, Action::Home);
        update(&mut app, Action::CursorLeft);
        assert_eq!(app.focused().cursor, 0);
        update(&mut app, Action::End);
        assert_eq!(app.focused().cursor, 2);
    }

    #[test]
    fn navigation_does_not_touch_text() {
        let mut app = App::with_values(["3", "4", "5"]);
        update(&mut app, Action::NextField);
        update(&mut app, Action::NextField);
        update(&mut app, Action::NextField);
        assert_eq!(app.focus, FieldId::A);
        assert_eq!(app.field(FieldId::B).text, "4");
    }
}
