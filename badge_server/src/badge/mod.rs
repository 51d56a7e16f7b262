//! Badge rendering — flat-style SVG and JSON forms.

use serde::Serialize;

use crate::models::status::BuildStatus;

/// A resolved badge: label (the builder name), status tag, and color.
#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub label: String,
    pub status: String,
    pub color: String,
}

impl Badge {
    pub fn new(label: &str, status: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            status: status.to_string(),
            color: color.to_string(),
        }
    }

    /// Badge for a resolved build status.
    pub fn build_status(label: &str, status: BuildStatus) -> Self {
        Self::new(label, status.as_str(), status.color())
    }

    /// Render as a flat-style SVG: grey label segment, colored status
    /// segment. Widths are estimated from text length.
    pub fn to_svg(&self) -> String {
        let label = xml_escape(&self.label);
        let status = xml_escape(&self.status);
        let label_width = segment_width(&self.label);
        let status_width = segment_width(&self.status);
        let total = label_width + status_width;
        let color = color_hex(&self.color);

        format!(
            concat!(
                r##"<svg xmlns="http://www.w3.org/2000/svg" width="{total}" height="20" role="img" aria-label="{label}: {status}">"##,
                r##"<rect width="{lw}" height="20" fill="#555"/>"##,
                r##"<rect x="{lw}" width="{sw}" height="20" fill="{color}"/>"##,
                r##"<g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,DejaVu Sans,sans-serif" font-size="11">"##,
                r##"<text x="{lx}" y="14">{label}</text>"##,
                r##"<text x="{sx}" y="14">{status}</text>"##,
                "</g></svg>"
            ),
            total = total,
            label = label,
            status = status,
            lw = label_width,
            sw = status_width,
            color = color,
            lx = label_width / 2,
            sx = label_width + status_width / 2,
        )
    }
}

/// Approximate pixel width of one badge segment (11px Verdana plus padding).
fn segment_width(text: &str) -> usize {
    6 * text.chars().count() + 10
}

/// Hex value for a named badge color. Unknown names fall back to lightgrey.
fn color_hex(name: &str) -> &'static str {
    match name {
        "brightgreen" => "#4c1",
        "green" => "#97ca00",
        "yellow" => "#dfb317",
        "orange" => "#fe7d37",
        "red" => "#e05d44",
        "blue" => "#007ec6",
        _ => "#9f9f9f",
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
