//! PDF export of a career analysis report.
//!
//! Layout is deliberately simple: A4, Helvetica built-ins, a header with the
//! report date, the four SWOT fields, then the narrative sections. Text is
//! word-wrapped at an estimated line width and pages are added as needed.

use chrono::Utc;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocumentReference, PdfLayerReference};

use crate::analysis::swot::SwotProfile;
use crate::errors::AppError;
use crate::report::sections::split_sections;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;

const TITLE_PT: f32 = 18.0;
const HEADING_PT: f32 = 13.0;
const BODY_PT: f32 = 10.0;

// Rough Helvetica average advance at 10pt against the printable width.
// Overestimating wraps early, which is safe; underestimating overflows.
const WRAP_COLUMNS: usize = 92;

/// Renders the SWOT profile and narrative report to PDF bytes.
pub fn render_report_pdf(swot: &SwotProfile, analysis: &str) -> Result<Vec<u8>, AppError> {
    let (doc, page, layer) = printpdf::PdfDocument::new(
        "Career Analysis Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Pdf(format!("Failed to load body font: {e}")))?;
    let bold_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::Pdf(format!("Failed to load heading font: {e}")))?;

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        cursor_y: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    writer.write_line("Career Analysis Report", TITLE_PT, &bold_font);
    writer.write_line(
        &format!("Generated on {}", Utc::now().format("%B %e, %Y")),
        BODY_PT,
        &body_font,
    );
    writer.space(6.0);

    writer.write_line("Your SWOT Profile", HEADING_PT, &bold_font);
    for (label, value) in [
        ("Strengths", &swot.strengths),
        ("Weaknesses", &swot.weaknesses),
        ("Opportunities", &swot.opportunities),
        ("Threats", &swot.threats),
    ] {
        writer.write_line(label, BODY_PT + 1.0, &bold_font);
        writer.write_wrapped(value, BODY_PT, &body_font);
        writer.space(3.0);
    }
    writer.space(4.0);

    for section in split_sections(analysis) {
        writer.write_line(&section.title, HEADING_PT, &bold_font);
        writer.write_wrapped(&section.body, BODY_PT, &body_font);
        writer.space(5.0);
    }
    drop(writer);

    doc.save_to_bytes()
        .map_err(|e| AppError::Pdf(format!("Failed to serialize PDF: {e}")))
}

/// Tracks the write cursor on the current page and adds pages on overflow.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    cursor_y: f32,
}

impl PageWriter<'_> {
    fn write_line(&mut self, text: &str, size_pt: f32, font: &IndirectFontRef) {
        let line_height = size_pt * 0.5;
        if self.cursor_y - line_height < MARGIN_MM {
            self.new_page();
        }
        self.cursor_y -= line_height;
        self.layer
            .use_text(text, size_pt, Mm(MARGIN_MM), Mm(self.cursor_y), font);
    }

    fn write_wrapped(&mut self, text: &str, size_pt: f32, font: &IndirectFontRef) {
        for line in text.lines() {
            if line.trim().is_empty() {
                self.space(2.0);
                continue;
            }
            for wrapped in wrap_line(line.trim(), WRAP_COLUMNS) {
                self.write_line(&wrapped, size_pt, font);
            }
        }
    }

    fn space(&mut self, mm: f32) {
        self.cursor_y -= mm;
        if self.cursor_y < MARGIN_MM {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        let (page, layer) =
            self.doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor_y = PAGE_HEIGHT_MM - MARGIN_MM;
    }
}

/// Greedy word wrap at a column estimate. Overlong single words get their
/// own line rather than being split.
fn wrap_line(line: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= columns {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
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

    fn sample_swot() -> SwotProfile {
        SwotProfile {
            strengths: "Python and data pipelines".into(),
            weaknesses: "Public speaking".into(),
            opportunities: "Cloud certifications".into(),
            threats: "Automation of routine work".into(),
        }
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let analysis = "## Career Path Recommendations\nData engineering.\n## Next Steps\nUpdate resume.";
        let bytes = render_report_pdf(&sample_swot(), analysis).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_handles_long_reports_across_pages() {
        let analysis = format!(
            "## Long Section\n{}",
            "This sentence repeats to force pagination. ".repeat(200)
        );
        let bytes = render_report_pdf(&sample_swot(), &analysis).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_tolerates_empty_analysis() {
        let bytes = render_report_pdf(&sample_swot(), "").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_wrap_line_respects_column_limit() {
        let wrapped = wrap_line(&"word ".repeat(50), 20);
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert!(line.chars().count() <= 20);
        }
    }

    #[test]
    fn test_wrap_line_keeps_overlong_word_whole() {
        let long_word = "x".repeat(150);
        let wrapped = wrap_line(&format!("short {long_word} tail"), 20);
        assert!(wrapped.contains(&long_word));
    }

    #[test]
    fn test_wrap_line_empty_input() {
        assert!(wrap_line("", 20).is_empty());
    }
}
