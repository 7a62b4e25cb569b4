//! Axum route handlers for report export and sharing.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::swot::SwotProfile;
use crate::errors::AppError;
use crate::report::pdf::render_report_pdf;
use crate::report::sections::split_sections;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub swot: SwotProfile,
    pub analysis: String,
}

#[derive(Debug, Deserialize)]
pub struct ShareRequest {
    pub swot: SwotProfile,
    pub analysis: String,
    pub recipient: String,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub status: String,
    pub recipient: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/reports/pdf
///
/// Renders the analysis report to PDF and returns it as a download.
pub async fn handle_export_pdf(
    State(_state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Response, AppError> {
    if request.analysis.trim().is_empty() {
        return Err(AppError::Validation("analysis cannot be empty".to_string()));
    }

    let pdf_bytes = render_report_pdf(&request.swot, &request.analysis)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"career-analysis.pdf\"",
            ),
        ],
        pdf_bytes,
    )
        .into_response())
}

/// POST /api/v1/reports/share
///
/// Builds the report PDF and e-mails it to the recipient. Fails cleanly when
/// the delivery provider is not configured.
pub async fn handle_share_report(
    State(state): State<AppState>,
    Json(request): Json<ShareRequest>,
) -> Result<Json<ShareResponse>, AppError> {
    if request.analysis.trim().is_empty() {
        return Err(AppError::Validation("analysis cannot be empty".to_string()));
    }
    if !is_valid_email(&request.recipient) {
        return Err(AppError::Validation(format!(
            "'{}' is not a valid email address",
            request.recipient
        )));
    }

    let mailer = state.mailer.as_ref().ok_or_else(|| {
        AppError::Email("Report sharing is not configured on this server".to_string())
    })?;

    let pdf_bytes = render_report_pdf(&request.swot, &request.analysis)?;
    let html = share_email_html(&request.analysis);

    mailer
        .send_report(
            &request.recipient,
            "Your Career Analysis Report",
            &html,
            &pdf_bytes,
        )
        .await?;

    Ok(Json(ShareResponse {
        status: "sent".to_string(),
        recipient: request.recipient,
    }))
}

fn is_valid_email(candidate: &str) -> bool {
    let re = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("invalid email pattern");
    re.is_match(candidate.trim())
}

/// HTML summary for the e-mail body; the full report travels as the PDF
/// attachment.
fn share_email_html(analysis: &str) -> String {
    let mut html = String::from(
        "<html><body style=\"font-family: Arial, sans-serif; padding: 24px;\">\
         <h2>Career Analysis Report</h2>\
         <p>Your personalized career analysis is attached as a PDF. Highlights:</p>",
    );
    for section in split_sections(analysis).iter().take(3) {
        html.push_str(&format!("<h3>{}</h3>", escape_html(&section.title)));
        let preview: String = section.body.chars().take(280).collect();
        html.push_str(&format!("<p>{}</p>", escape_html(&preview)));
    }
    html.push_str("</body></html>");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("  first.last+tag@sub.domain.org "));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_share_email_html_previews_first_sections() {
        let analysis = "## One\nalpha\n## Two\nbeta\n## Three\ngamma\n## Four\ndelta";
        let html = share_email_html(analysis);
        assert!(html.contains("<h3>One</h3>"));
        assert!(html.contains("<h3>Three</h3>"));
        assert!(!html.contains("Four"));
    }

    #[test]
    fn test_share_email_html_escapes_markup() {
        let html = share_email_html("## <script>\nx & y");
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("x &amp; y"));
    }
}
