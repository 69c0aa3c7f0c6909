//! Triangle classification from side lengths.
//!
//! Pure functions — no I/O, easily testable. Malformed input is an
//! ordinary outcome (`TriangleCategory::Invalid`), never an error.

use crate::types::{Classification, SideLengths, TriangleCategory};

/// Slack allowed when testing the Pythagorean relation.
///
/// Absorbs rounding error, so that e.g. (5, 5, 5·√2) still counts as right.
pub const RIGHT_ANGLE_TOLERANCE: f64 = 1e-8;

/// Rounding slack, in units of the longest side's epsilon, below which a
/// triangle counts as flat.
///
/// Decimal input is not exact in binary: 0.1 + 0.2 exceeds 0.3 by one ulp.
pub const FLAT_TOLERANCE_ULPS: f64 = 4.0;

/// Classify three side-length strings.
///
/// Each string is parsed independently; if any fails the result is
/// `Invalid` with no sides attached. Otherwise the parsed sides are
/// classified and carried along when the triangle is valid.
pub fn classify(a_text: &str, b_text: &str, c_text: &str) -> Classification {
    let parsed = (parse_side(a_text), parse_side(b_text), parse_side(c_text));

    let (Some(a), Some(b), Some(c)) = parsed else {
        log::debug!("unparsable input: {a_text:?}, {b_text:?}, {c_text:?}");
        return Classification::invalid();
    };

    let sides = SideLengths::new(a, b, c);
    let category = classify_sides(sides);
    log::debug!("classified ({a}, {b}, {c}) as {category:?}");

    Classification {
        category,
        sides: category.is_valid().then_some(sides),
    }
}

/// Parse one side length.
///
/// Surrounding whitespace is ignored. Infinities and NaN are rejected:
/// they parse as `f64` but are not lengths.
pub fn parse_side(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Classify three numeric side lengths.
pub fn classify_sides(sides: SideLengths) -> TriangleCategory {
    if !is_valid_triangle(&sides) {
        return TriangleCategory::Invalid;
    }

    let tentative = shape_by_equal_sides(&sides);

    if has_right_angle(&sides) {
        // Equilateral + right cannot happen with real sides; if float noise
        // ever produces it, Right wins.
        match tentative {
            TriangleCategory::Isosceles => TriangleCategory::RightIsosceles,
            _ => TriangleCategory::Right,
        }
    } else {
        tentative
    }
}

/// All sides strictly positive and every strict triangle inequality holds.
///
/// Flat triangles (a + b == c) are rejected, including those that only miss
/// equality by rounding error (see [`FLAT_TOLERANCE_ULPS`]).
pub fn is_valid_triangle(sides: &SideLengths) -> bool {
    let SideLengths { a, b, c } = *sides;

    if a <= 0.0 || b <= 0.0 || c <= 0.0 {
        return false;
    }

    let tolerance = sides.longest() * FLAT_TOLERANCE_ULPS * f64::EPSILON;

    (a + b) - c > tolerance && (a + c) - b > tolerance && (b + c) - a > tolerance
}

// ============================================================================
// INTERNAL
// ============================================================================

fn shape_by_equal_sides(sides: &SideLengths) -> TriangleCategory {
    let SideLengths { a, b, c } = *sides;

    if a == b && b == c {
        TriangleCategory::Equilateral
    } else if a == b || a == c || b == c {
        TriangleCategory::Isosceles
    } else {
        TriangleCategory::Scalene
    }
}

/// Any of the three sides may be the hypotenuse.
///
/// Sides whose squares overflow `f64` are first divided by the longest
/// side; everything else is compared at true size against the absolute
/// tolerance.
fn has_right_angle(sides: &SideLengths) -> bool {
    let longest = sides.longest();
    let sides = if (longest * longest).is_finite() {
        *sides
    } else {
        sides.scaled_down(longest)
    };
    let (a2, b2, c2) = (sides.a * sides.a, sides.b * sides.b, sides.c * sides.c);

    (c2 - a2 - b2).abs() < RIGHT_ANGLE_TOLERANCE
        || (a2 - b2 - c2).abs() < RIGHT_ANGLE_TOLERANCE
        || (b2 - a2 - c2).abs() < RIGHT_ANGLE_TOLERANCE
}

// ============================================================================
// TESTS
// ============================================================================
