//! Domain types for triangles.
//!
//! Plain values only. Every type here is recreated on each input change
//! and never outlives a single recompute.

use serde::Serialize;

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Three side lengths, in the order the user entered them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SideLengths {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl SideLengths {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// The longest of the three sides.
    pub fn longest(&self) -> f64 {
        self.a.max(self.b).max(self.c)
    }

    /// Divide every side by `factor`.
    pub fn scaled_down(&self, factor: f64) -> Self {
        Self {
            a: self.a / factor,
            b: self.b / factor,
            c: self.c / factor,
        }
    }
}

/// A point in screen coordinates: x grows rightward, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A 24-bit display color, independent of any rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

// ============================================================================
// ENUMS
// ============================================================================

/// What kind of triangle three side lengths make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangleCategory {
    /// Unparsable, non-positive, or violates the triangle inequality.
    Invalid,
    /// No two sides equal, no right angle.
    Scalene,
    /// Exactly one pair of equal sides, no right angle.
    Isosceles,
    /// All three sides equal.
    Equilateral,
    /// Has a right angle and is not isosceles.
    Right,
    /// Has a right angle and two equal legs.
    RightIsosceles,
}

impl TriangleCategory {
    /// Every category except `Invalid` describes a drawable triangle.
    pub fn is_valid(&self) -> bool {
        !matches!(self, TriangleCategory::Invalid)
    }

    /// The tail of the result sentence, article suffix included.
    ///
    /// Appended directly to "These side lengths produce a", so the
    /// invalid phrase starts with the "n" of "an".
    pub fn phrase(&self) -> &'static str {
        match self {
            TriangleCategory::Invalid => "n invalid",
            TriangleCategory::Scalene => " valid scalene",
            TriangleCategory::Isosceles => " valid isosceles",
            TriangleCategory::Equilateral => " valid equilateral",
            TriangleCategory::Right => " valid right",
            TriangleCategory::RightIsosceles => " valid right isosceles",
        }
    }
}

/// Output format for non-interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
    /// A standalone SVG drawing.
    Svg,
}

// ============================================================================
// STRUCTS
// ============================================================================

/// Outcome of classifying three side-length strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub category: TriangleCategory,
    /// The parsed sides. Present exactly when the category is valid.
    pub sides: Option<SideLengths>,
}

impl Classification {
    pub fn invalid() -> Self {
        Self {
            category: TriangleCategory::Invalid,
            sides: None,
        }
    }
}

/// Drawable form of a valid triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    /// Base-left, base-right, apex.
    pub points: [Point2D; 3],
    /// Fill color chosen from the category.
    pub color: Rgb,
    /// Factor the input sides were divided by (1.0 = true size).
    pub scale: f64,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// The surface a triangle is drawn onto.
///
/// `anchor_y` is the y coordinate where free vertical space begins
/// (the bottom edge of the result label in the original layout).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub anchor_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, anchor_y: f64) -> Self {
        Self {
            width,
            height,
            anchor_y,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            anchor_y: 120.0,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_picks_max_side() {
        assert_eq!(SideLengths::new(3.0, 5.0, 4.0).longest(), 5.0);
        assert_eq!(SideLengths::new(7.0, 1.0, 2.0).longest(), 7.0);
    }

    #[test]
    fn only_invalid_is_not_valid() {
        assert!(!TriangleCategory::Invalid.is_valid());
        assert!(TriangleCategory::Scalene.is_valid());
        assert!(TriangleCategory::RightIsosceles.is_valid());
    }

    #[test]
    fn rgb_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(0, 255, 10).to_hex(), "#00ff0a");
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&TriangleCategory::RightIsosceles).unwrap();
        assert_eq!(json, "\"right_isosceles\"");
    }

    #[test]
    fn invalid_classification_carries_no_sides() {
        let c = Classification::invalid();
        assert_eq!(c.category, TriangleCategory::Invalid);
        assert!(c.sides.is_none());
    }
}
