//! Geometry projection: side lengths → three drawable points.
//!
//! Pure functions — (SideLengths, Viewport) → Projection. No I/O,
//! no hidden state: identical inputs always give identical output.
//!
//! Placement:
//! - The base (side `a`) lies horizontally, centred on the origin.
//! - The origin sits at the bottom-centre of the viewport, slightly inset.
//! - The apex is found with the law of cosines and drawn above the base.

use crate::types::{Point2D, Projection, Rgb, SideLengths, TriangleCategory, Viewport};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Share of the free vertical space (below the anchor) a triangle may use.
pub const SPAN_FRACTION: f64 = 0.85;

/// Horizontal position of the origin, as a share of viewport width.
pub const ORIGIN_X_FRACTION: f64 = 0.5;

/// Vertical position of the origin, as a share of viewport height.
pub const ORIGIN_Y_FRACTION: f64 = 0.97;

/// `min_length = max_length / MIN_SPAN_DIVISOR`.
pub const MIN_SPAN_DIVISOR: f64 = 5.0;

/// Outline color for every drawn triangle.
pub const OUTLINE: Rgb = Rgb::new(0, 0, 0);

/// Fill colors per category.
pub mod palette {
    use crate::types::Rgb;

    pub const AQUA: Rgb = Rgb::new(0x00, 0xff, 0xff);
    pub const BLUE_VIOLET: Rgb = Rgb::new(0x8a, 0x2b, 0xe2);
    pub const LIGHT_BLUE: Rgb = Rgb::new(0xad, 0xd8, 0xe6);
    pub const LIGHT_GOLDENROD_YELLOW: Rgb = Rgb::new(0xfa, 0xfa, 0xd2);
    pub const MINT_CREAM: Rgb = Rgb::new(0xf5, 0xff, 0xfa);
}

// ============================================================================
// VIEWPORT GEOMETRY
// ============================================================================

impl Viewport {
    /// Longest side that fits: 85% of the space below the anchor.
    ///
    /// Zero when the anchor is at or below the bottom edge.
    pub fn max_length(&self) -> f64 {
        ((self.height - self.anchor_y) * SPAN_FRACTION).max(0.0)
    }

    /// Shortest longest-side drawn without rescaling.
    pub fn min_length(&self) -> f64 {
        self.max_length() / MIN_SPAN_DIVISOR
    }

    /// Midpoint of the triangle's base.
    pub fn origin(&self) -> Point2D {
        Point2D::new(
            self.width * ORIGIN_X_FRACTION,
            self.height * ORIGIN_Y_FRACTION,
        )
    }
}

/// Factor to divide all sides by so the triangle fits `viewport`.
///
/// A longest side inside `[min_length, max_length]` is drawn at true size
/// (factor 1). Outside that range the longest side is normalised to
/// `max_length`, which shrinks oversized triangles and enlarges tiny ones.
/// Triangles already in range are never normalised, so two valid inputs
/// can be drawn at very different sizes.
pub fn scale_factor(longest: f64, viewport: &Viewport) -> f64 {
    let max_length = viewport.max_length();
    if max_length <= 0.0 || longest <= 0.0 {
        return 1.0;
    }

    if longest < viewport.min_length() || longest > max_length {
        longest / max_length
    } else {
        1.0
    }
}

// ============================================================================
// PROJECTION
// ============================================================================

/// Compute the three vertices and fill color of a valid triangle.
///
/// Callers must only pass sides the classifier accepted (`a > 0` in
/// particular). Points are `[base_left, base_right, apex]`.
pub fn project(sides: SideLengths, viewport: &Viewport, category: TriangleCategory) -> Projection {
    let scale = scale_factor(sides.longest(), viewport);
    let SideLengths { a, b, c } = sides.scaled_down(scale);
    let origin = viewport.origin();

    let base_left = Point2D::new(origin.x - a / 2.0, origin.y);
    let base_right = Point2D::new(origin.x + a / 2.0, origin.y);

    // Foot of the apex along the base, then its height above it.
    let x = (a * a + b * b - c * c) / (2.0 * a);
    let y = (b * b - x * x).max(0.0).sqrt();
    let apex = Point2D::new(base_left.x + x, origin.y - y);

    Projection {
        points: [base_left, base_right, apex],
        color: category_color(category),
        scale,
    }
}

/// Fill color for a category. `Invalid` is never drawn; it shares the
/// scalene color so the mapping stays total.
pub fn category_color(category: TriangleCategory) -> Rgb {
    match category {
        TriangleCategory::RightIsosceles => palette::AQUA,
        TriangleCategory::Isosceles => palette::BLUE_VIOLET,
        TriangleCategory::Right => palette::LIGHT_BLUE,
        TriangleCategory::Equilateral => palette::LIGHT_GOLDENROD_YELLOW,
        TriangleCategory::Scalene | TriangleCategory::Invalid => palette::MINT_CREAM,
    }
}

// ============================================================================
// TESTS
// ============================================================================
