//! Splits a narrative report into titled sections for rendering.
//!
//! The LLM is asked to introduce each major section with a "##" heading, but
//! the format is advisory: untitled leading prose becomes an "Overview"
//! section and reports with no headings at all yield a single section.

/// One renderable section of the narrative report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: String,
    pub body: String,
}

/// Title given to leading prose that appears before any heading.
const UNTITLED_SECTION: &str = "Overview";

/// Splits a report on `##` heading lines. Blank sections are dropped.
pub fn split_sections(report: &str) -> Vec<ReportSection> {
    let mut sections = Vec::new();
    let mut title = UNTITLED_SECTION.to_string();
    let mut body = String::new();

    for line in report.lines() {
        let trimmed = line.trim_start();
        if let Some(heading) = trimmed.strip_prefix("##") {
            push_section(&mut sections, &title, &body);
            title = heading.trim_start_matches('#').trim().to_string();
            body.clear();
        } else {
            body.push_str(line);
            body.push('\n');
        }
    }
    push_section(&mut sections, &title, &body);

    sections
}

fn push_section(sections: &mut Vec<ReportSection>, title: &str, body: &str) {
    let body = body.trim();
    if body.is_empty() && (title.is_empty() || title == UNTITLED_SECTION) {
        return;
    }
    sections.push(ReportSection {
        title: if title.is_empty() {
            UNTITLED_SECTION.to_string()
        } else {
            title.to_string()
        },
        body: body.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_hash_headings() {
        let report = "## Career Path Recommendations\n\
            Data engineering and analytics leadership.\n\
            ## Next Steps\n\
            Update the resume this month.";
        let sections = split_sections(report);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Career Path Recommendations");
        assert_eq!(sections[0].body, "Data engineering and analytics leadership.");
        assert_eq!(sections[1].title, "Next Steps");
        assert_eq!(sections[1].body, "Update the resume this month.");
    }

    #[test]
    fn test_leading_prose_becomes_overview() {
        let report = "Here is the analysis.\n## Details\nSome detail.";
        let sections = split_sections(report);
        assert_eq!(sections[0].title, "Overview");
        assert_eq!(sections[0].body, "Here is the analysis.");
        assert_eq!(sections[1].title, "Details");
    }

    #[test]
    fn test_report_without_headings_is_single_section() {
        let sections = split_sections("Just a paragraph of advice.");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Overview");
    }

    #[test]
    fn test_empty_report_yields_no_sections() {
        assert!(split_sections("").is_empty());
        assert!(split_sections("\n\n   \n").is_empty());
    }

    #[test]
    fn test_blank_sections_are_dropped_but_titled_empties_kept() {
        let report = "## Skipped\n\n\n## Kept\ncontent";
        let sections = split_sections(report);
        // A titled heading with no body still renders as a stub section.
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Skipped");
        assert_eq!(sections[0].body, "");
        assert_eq!(sections[1].title, "Kept");
    }

    #[test]
    fn test_deeper_headings_fold_into_title() {
        let sections = split_sections("### Action Plan\nDo things.");
        assert_eq!(sections[0].title, "Action Plan");
    }
}
