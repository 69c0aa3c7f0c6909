//! Report formatting for classification results.
//!
//! Pure functions — (Classification, Projection, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::project::OUTLINE;
use crate::types::{
    Classification, OutputFormat, Projection, SideLengths, TriangleCategory, Viewport,
};

/// The one-line result sentence shown under the input fields.
///
/// "These side lengths produce an invalid triangle."
/// "These side lengths produce a valid right isosceles triangle."
pub fn describe(category: TriangleCategory) -> String {
    format!("These side lengths produce a{} triangle.", category.phrase())
}

/// Everything a non-interactive command reports about one input triple.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    /// The raw strings as given.
    pub input: [String; 3],
    pub category: TriangleCategory,
    pub label: String,
    pub sides: Option<SideLengths>,
    pub projection: Option<Projection>,
}

impl ClassificationReport {
    pub fn new(
        input: [String; 3],
        classification: Classification,
        projection: Option<Projection>,
    ) -> Self {
        Self {
            input,
            category: classification.category,
            label: describe(classification.category),
            sides: classification.sides,
            projection,
        }
    }
}

/// Format a classification report for output.
///
/// Pure function: takes data, returns formatted string.
pub fn format_report(report: &ClassificationReport, viewport: &Viewport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
        OutputFormat::Svg => render_svg(viewport, report.projection.as_ref(), &report.label),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(report: &ClassificationReport) -> String {
    let mut out = String::new();
    out.push_str(&report.label);
    out.push('\n');

    if let Some(sides) = &report.sides {
        out.push('\n');
        out.push_str(&format!("Sides:    a = {}, b = {}, c = {}\n", sides.a, sides.b, sides.c));
    }

    if let Some(projection) = &report.projection {
        let [p1, p2, p3] = projection.points;
        out.push_str(&format!("Scale:    1/{:.4}\n", projection.scale));
        out.push_str(&format!("Vertices: ({:.2}, {:.2})  ({:.2}, {:.2})  ({:.2}, {:.2})\n",
            p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
        ));
        out.push_str(&format!("Color:    {}\n", projection.color.to_hex()));
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(report: &ClassificationReport) -> String {
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        // Plain data with string keys; serialization cannot fail
        panic!("Failed to serialize report to JSON: {}", e)
    })
}

// ============================================================================
// SVG FORMAT
// ============================================================================

/// Render the label and, if present, the filled triangle as an SVG document.
pub fn render_svg(viewport: &Viewport, projection: Option<&Projection>, label: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = viewport.width,
        h = viewport.height
    ));
    out.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");

    // Label baseline sits just above the anchor, like the form's result text.
    let label_y = (viewport.anchor_y * 0.5).max(16.0);
    out.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"16\" text-anchor=\"middle\">{}</text>\n",
        viewport.width / 2.0,
        label_y,
        escape_xml(label)
    ));

    if let Some(projection) = projection {
        let points: Vec<String> = projection
            .points
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect();
        out.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            points.join(" "),
            projection.color.to_hex(),
            OUTLINE.to_hex()
        ));
    }

    out.push_str("</svg>\n");
    out
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
