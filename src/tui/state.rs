//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. The transition function
//! and the rendering layer both program against them.
//!
//! Design principle: App stores only what the user typed plus the
//! classification derived from it. The projected triangle depends on the
//! terminal size, so it is derived during rendering, not stored here.

use crate::classify::classify;
use crate::sanitize;
use crate::types::Classification;

// ============================================================================
// FIELDS
// ============================================================================

/// Which side-length field is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldId {
    #[default]
    A,
    B,
    C,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::A, FieldId::B, FieldId::C];

    pub fn index(self) -> usize {
        match self {
            FieldId::A => 0,
            FieldId::B => 1,
            FieldId::C => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::A => "a",
            FieldId::B => "b",
            FieldId::C => "c",
        }
    }

    /// Tab order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            FieldId::A => FieldId::B,
            FieldId::B => FieldId::C,
            FieldId::C => FieldId::A,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FieldId::A => FieldId::C,
            FieldId::B => FieldId::A,
            FieldId::C => FieldId::B,
        }
    }
}

/// One editable side-length field.
///
/// `cursor` is a byte offset into `text`. The sanitizer only ever admits
/// ASCII, so byte offsets and character offsets coincide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub text: String,
    pub cursor: usize,
}

impl Field {
    /// A field pre-filled with `text`, cursor at the end.
    ///
    /// The text is run through the sanitizer first, so a field can never
    /// hold anything a user could not have typed.
    pub fn with_text(text: &str) -> Self {
        let text = sanitize::filter(text);
        let cursor = text.len();
        Field { text, cursor }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Side-length fields a, b, c.
    pub fields: [Field; 3],

    /// Field receiving keystrokes.
    pub focus: FieldId,

    /// Result for the current field texts. Replaced wholesale on every edit.
    pub classification: Classification,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Create an App with three empty fields (classified as invalid).
    pub fn new() -> Self {
        Self::with_values(["", "", ""])
    }

    /// Create an App with pre-filled fields, already classified.
    pub fn with_values(values: [&str; 3]) -> Self {
        let mut app = App {
            fields: values.map(Field::with_text),
            focus: FieldId::A,
            classification: Classification::invalid(),
            should_quit: false,
        };
        app.recompute();
        app
    }

    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.index()]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut Field {
        &mut self.fields[id.index()]
    }

    pub fn focused(&self) -> &Field {
        self.field(self.focus)
    }

    /// Reclassify from the current field texts, discarding the old result.
    pub fn recompute(&mut self) {
        let [a, b, c] = &self.fields;
        self.classification = classify(&a.text, &b.text, &c.text);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The transition function decides what each Action means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the focused field (subject to the sanitizer).
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    CursorLeft,
    CursorRight,
    Home,
    End,
    /// Focus the next field.
    NextField,
    /// Focus the previous field.
    PrevField,
    /// Empty the focused field.
    ClearField,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a state transition.
///
/// The update function returns this. The effects boundary inspects it
/// to decide whether to keep looping.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Keep running; redraw on the next tick.
    Continue,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
