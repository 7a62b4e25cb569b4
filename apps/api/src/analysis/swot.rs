//! SWOT extractor: recovers the four SWOT fields from a freeform narrative report.
//!
//! The narrative comes back from the LLM loosely sectioned but with no guaranteed
//! schema. Extraction is best-effort per field: a heading that cannot be located,
//! or a body too short to be useful, falls back to that field's fixed default
//! sentence. The extractor is total: it never fails and never returns an empty field.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Hard cap on extracted field length, applied after cleanup.
const MAX_FIELD_CHARS: usize = 400;
/// A cleaned capture is accepted only if strictly longer than this.
const MIN_FIELD_CHARS: usize = 10;

const DEFAULT_STRENGTHS: &str =
    "Strong technical skills and experience based on resume analysis";
const DEFAULT_WEAKNESSES: &str = "Areas for improvement identified from resume review";
const DEFAULT_OPPORTUNITIES: &str = "Career growth opportunities based on current profile";
const DEFAULT_THREATS: &str = "Market challenges and competitive factors to consider";

/// The four-field SWOT self-assessment. Used both as user input (manual form)
/// and as extractor output; every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotProfile {
    pub strengths: String,
    pub weaknesses: String,
    pub opportunities: String,
    pub threats: String,
}

impl SwotProfile {
    /// True when every field has non-whitespace content. Gates the manual
    /// analysis submit path.
    pub fn is_complete(&self) -> bool {
        !self.strengths.trim().is_empty()
            && !self.weaknesses.trim().is_empty()
            && !self.opportunities.trim().is_empty()
            && !self.threats.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

impl Field {
    const ALL: [Field; 4] = [
        Field::Strengths,
        Field::Weaknesses,
        Field::Opportunities,
        Field::Threats,
    ];

    /// Case-insensitive heading synonyms, as regex alternatives.
    fn synonyms(self) -> &'static [&'static str] {
        match self {
            Field::Strengths => &[r"strengths?", r"strong\s+points?"],
            Field::Weaknesses => &[
                r"weaknesses?",
                r"areas\s+for\s+improvement",
                r"limitations?",
            ],
            Field::Opportunities => &[r"opportunit(?:y|ies)", r"potential", r"growth\s+areas?"],
            Field::Threats => &[r"threats?", r"challenges?", r"risks?", r"obstacles?"],
        }
    }

    /// Fallback sentence used when this field cannot be extracted.
    fn default_text(self) -> &'static str {
        match self {
            Field::Strengths => DEFAULT_STRENGTHS,
            Field::Weaknesses => DEFAULT_WEAKNESSES,
            Field::Opportunities => DEFAULT_OPPORTUNITIES,
            Field::Threats => DEFAULT_THREATS,
        }
    }
}

/// Extracts a `SwotProfile` from a narrative report.
///
/// Pure and total: any field whose heading is missing, or whose body is too
/// short after cleanup, gets its default sentence. Fields are extracted
/// independently; a miss on one never affects the others.
pub fn extract_swot(report: &str) -> SwotProfile {
    SwotProfile {
        strengths: field_or_default(report, Field::Strengths),
        weaknesses: field_or_default(report, Field::Weaknesses),
        opportunities: field_or_default(report, Field::Opportunities),
        threats: field_or_default(report, Field::Threats),
    }
}

fn field_or_default(report: &str, field: Field) -> String {
    extract_field(report, field).unwrap_or_else(|| field.default_text().to_string())
}

fn extract_field(report: &str, field: Field) -> Option<String> {
    let start = find_heading(report, field)?;
    let raw = capture_until_boundary(&report[start..], field);
    let cleaned = clean_capture(&raw);
    (cleaned.chars().count() > MIN_FIELD_CHARS).then_some(cleaned)
}

/// Matches the field's synonym words anywhere in the text.
fn word_regex(field: Field) -> Regex {
    let pattern = format!(r"(?i)\b(?:{})\b", field.synonyms().join("|"));
    Regex::new(&pattern).expect("invalid synonym pattern")
}

/// Matches a line that begins with the field's synonym used as a heading,
/// allowing markdown hash and bold prefixes.
fn boundary_regex(field: Field) -> Regex {
    let pattern = format!(
        r"(?i)^\s*(?:#{{1,6}}\s*)?(?:\*\*\s*)?(?:{})\b",
        field.synonyms().join("|")
    );
    Regex::new(&pattern).expect("invalid boundary pattern")
}

/// Finds the first occurrence of a field synonym used as a heading, i.e.
/// followed by a colon, whitespace, or end of text. Returns the byte offset
/// where the section body starts (colon/whitespace run consumed).
fn find_heading(report: &str, field: Field) -> Option<usize> {
    let re = word_regex(field);
    for m in re.find_iter(report) {
        let rest = &report[m.end()..];
        match rest.chars().next() {
            None => return Some(report.len()),
            Some(c) if c == ':' || c.is_whitespace() => {
                let body = rest.trim_start_matches(|c: char| c == ':' || c.is_whitespace());
                return Some(report.len() - body.len());
            }
            // Synonym embedded in running text ("strengths," etc.): keep looking.
            Some(_) => continue,
        }
    }
    None
}

/// Captures lines from the start of `text` up to the first line that begins a
/// heading for one of the OTHER three fields, or a generic `##` sub-heading,
/// or end of text. Adjacent sections are never swallowed.
fn capture_until_boundary(text: &str, field: Field) -> String {
    let boundaries: Vec<Regex> = Field::ALL
        .iter()
        .filter(|f| **f != field)
        .map(|f| boundary_regex(*f))
        .collect();

    let mut captured = String::new();
    for line in text.lines() {
        if is_boundary_line(line, &boundaries) {
            break;
        }
        captured.push_str(line);
        captured.push('\n');
    }
    captured
}

fn is_boundary_line(line: &str, boundaries: &[Regex]) -> bool {
    if line.trim_start().starts_with("##") {
        return true;
    }
    boundaries.iter().any(|re| re.is_match(line))
}

/// Cleans a raw capture: strips leading bullet-marker runs per line, unwraps
/// `**bold**` pairs and `[bracketed]` text, trims, then caps at
/// `MAX_FIELD_CHARS` characters. Cleanup runs on the full capture before the
/// cap is applied.
fn clean_capture(raw: &str) -> String {
    // Markers must be followed by whitespace so a leading `**bold**` span is
    // left for the bold pass instead of being half-eaten as bullets.
    let bullets = Regex::new(r"(?m)^\s*(?:[-*•]\s+)+").expect("invalid bullet pattern");
    let bold = Regex::new(r"\*\*(.*?)\*\*").expect("invalid bold pattern");
    let brackets = Regex::new(r"\[(.*?)\]").expect("invalid bracket pattern");

    let text = bullets.replace_all(raw, "");
    let text = bold.replace_all(&text, "$1");
    let text = brackets.replace_all(&text, "$1");

    truncate_chars(text.trim(), MAX_FIELD_CHARS)
        .trim_end()
        .to_string()
}

/// Truncates at a character boundary, never mid-scalar.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
