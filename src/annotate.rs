//! Annotation overlay — renders recognition results as an SVG layer.
//!
//! Each claimed note gets an outline rectangle plus two small labels:
//! the duration class above the box and the solmization name below it.
//! The overlay is sized to the page so a viewer can stack it over the
//! original scan.

use crate::model::Recognition;

const BOX_COLOR: &str = "#cc0000";
const PITCH_COLOR: &str = "#0000cc";
const LABEL_SIZE: f64 = 9.0;

/// Abbreviation for a duration class.
pub fn duration_label(duration_class: i32) -> &'static str {
    match duration_class {
        64 => "WH",
        32 => "HLF",
        16 => "Q",
        8 => "S",
        _ => "?",
    }
}

/// Solmization name for a diatonic degree.
pub fn pitch_label(degree: u8) -> &'static str {
    match degree {
        1 => "DO",
        2 => "RE",
        3 => "MI",
        4 => "FA",
        5 => "SOL",
        6 => "LA",
        7 => "SI",
        _ => "?",
    }
}

struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    fn new(width: f64, height: f64) -> Self {
        Self { elements: Vec::new(), width, height }
    }

    fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn rect_outline(&mut self, x: f64, y: f64, w: f64, h: f64, stroke: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="{}" stroke-width="1.0"/>"#,
            x, y, w, h, stroke
        ));
    }

    fn text(&mut self, x: f64, y: f64, content: &str, fill: &str) {
        let escaped = content
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" fill="{}" text-anchor="start">{}</text>"#,
            x, y, LABEL_SIZE, fill, escaped
        ));
    }
}

/// Render the annotation overlay for one recognized page.
///
/// Unclaimed candidates are left unmarked.
pub fn render_annotations_svg(recognition: &Recognition) -> String {
    let mut svg = SvgBuilder::new(recognition.cols as f64, recognition.rows as f64);

    for note in recognition.notes.iter().filter(|n| n.claimed) {
        let x = note.bbox.left as f64;
        let y = note.bbox.top as f64;
        svg.rect_outline(x, y, note.bbox.width as f64, note.bbox.height as f64, BOX_COLOR);
        svg.text(x, y - 10.0, duration_label(note.duration), BOX_COLOR);
        svg.text(x, y + 18.0, pitch_label(note.degree), PITCH_COLOR);
    }

    svg.build()
}
