// All LLM prompt constants for the Analysis module.

/// Career analysis prompt for a manually entered SWOT profile.
/// Replace: {strengths}, {weaknesses}, {opportunities}, {threats}
pub const PROFILE_ANALYSIS_PROMPT_TEMPLATE: &str = r###"Please analyze the following SWOT analysis and provide comprehensive career recommendations:

STRENGTHS:
{strengths}

WEAKNESSES:
{weaknesses}

OPPORTUNITIES:
{opportunities}

THREATS:
{threats}

Based on this SWOT analysis, please provide:
1. Career path recommendations (at least 3 specific career options)
2. Skills to develop (based on weaknesses and opportunities)
3. Action plan with specific steps
4. Timeline for career development
5. Ways to leverage strengths
6. Strategies to mitigate threats
7. Industry trends that align with their profile

Please format the response in a structured, actionable manner that would be helpful for career planning. Introduce each major section with a "##" heading."###;

/// Resume analysis prompt. The response is expected (but not guaranteed) to
/// contain SWOT-labeled sections, which the extractor then recovers.
/// Replace: {resume_text}, {name}, {email}, {experience}
pub const RESUME_ANALYSIS_PROMPT_TEMPLATE: &str = r###"Analyze the following resume and create a SWOT analysis for career planning:

RESUME CONTENT:
{resume_text}

ADDITIONAL INFO:
Name: {name}
Email: {email}
Years of Experience: {experience}

Please provide:
1. SWOT Analysis (Strengths, Weaknesses, Opportunities, Threats)
2. Career recommendations
3. Skills gap analysis
4. Next steps for career advancement

Format the response in a structured manner suitable for career planning, with a "##" heading per section and one section per SWOT category."###;

/// Fallback slot value when an optional intake field was not supplied.
pub const NOT_PROVIDED: &str = "Not provided";

/// Renders the profile analysis prompt from a SWOT profile.
pub fn profile_analysis_prompt(
    strengths: &str,
    weaknesses: &str,
    opportunities: &str,
    threats: &str,
) -> String {
    PROFILE_ANALYSIS_PROMPT_TEMPLATE
        .replace("{strengths}", strengths)
        .replace("{weaknesses}", weaknesses)
        .replace("{opportunities}", opportunities)
        .replace("{threats}", threats)
}

/// Renders the resume analysis prompt. Blank optional fields render as
/// "Not provided" rather than empty slots.
pub fn resume_analysis_prompt(
    resume_text: &str,
    name: &str,
    email: &str,
    experience: Option<&str>,
) -> String {
    let experience = match experience {
        Some(e) if !e.trim().is_empty() => e,
        _ => NOT_PROVIDED,
    };
    RESUME_ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{name}", name)
        .replace("{email}", email)
        .replace("{experience}", experience)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_prompt_fills_all_slots() {
        let prompt = profile_analysis_prompt("s", "w", "o", "t");
        assert!(prompt.contains("STRENGTHS:\ns"));
        assert!(prompt.contains("WEAKNESSES:\nw"));
        assert!(prompt.contains("OPPORTUNITIES:\no"));
        assert!(prompt.contains("THREATS:\nt"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_resume_prompt_defaults_missing_experience() {
        let prompt = resume_analysis_prompt("resume body", "Ada", "ada@example.com", None);
        assert!(prompt.contains("Years of Experience: Not provided"));
        assert!(prompt.contains("Name: Ada"));
    }

    #[test]
    fn test_resume_prompt_keeps_given_experience() {
        let prompt = resume_analysis_prompt("resume body", "Ada", "ada@example.com", Some("7"));
        assert!(prompt.contains("Years of Experience: 7"));
    }

    #[test]
    fn test_resume_prompt_blank_experience_treated_as_missing() {
        let prompt = resume_analysis_prompt("resume body", "Ada", "ada@example.com", Some("  "));
        assert!(prompt.contains("Years of Experience: Not provided"));
    }
}
