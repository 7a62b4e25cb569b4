// Report delivery: section formatting, PDF export, e-mail sharing.

pub mod handlers;
pub mod mailer;
pub mod pdf;
pub mod sections;
