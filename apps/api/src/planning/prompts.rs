// Prompt constants for hiring plan generation.

use crate::planning::form::HiringForm;

/// Hiring plan prompt template.
/// Replace: {company_information}, {position_details}, {project_requirements},
///          {team_dynamics}, {recruitment_goals}
pub const PLAN_PROMPT_TEMPLATE: &str = r#"
Generate a detailed AI/ML Hiring Plan based on the following information.

**Company Information:**
{company_information}

**Position Details:**
{position_details}

**Project Requirements:**
{project_requirements}

**Team Dynamics:**
{team_dynamics}

**Recruitment Goals:**
{recruitment_goals}

Please generate a hiring plan with the following sections:

**1. Executive Summary:**
Provide a brief overview of the role and the hiring need.

**2. Position Overview:**
Detail the Job Title, reporting structure, and key responsibilities.

**3. Required Skills and Qualifications:**
List the necessary technical skills, soft skills, and any preferred qualifications.

**4. Project Context and Impact:**
Explain the specific AI/ML projects the hire will work on and their expected impact.

**5. Team Integration and Dynamics:**
Describe how the new hire will fit into the existing team structure and collaboration style.

**6. Recruitment Strategy and Process:**
Outline the recruitment timeline, stages, and assessment methods.

**7. Goals and Success Metrics for the Hire:**
Define the key objectives and how the success of the new hire will be measured.

Ensure the plan is detailed, well-structured, and written in a professional tone. Use markdown for clear section headers.
"#;

/// Appended to every generated plan.
pub const CLOSING_SENTENCE: &str = "This plan provides a framework for a successful and efficient recruitment process. Regular review and adjustment based on progress and market conditions will be essential.";

/// Fills the plan template with the form values, verbatim.
pub fn build_plan_prompt(form: &HiringForm) -> String {
    fill_template(PLAN_PROMPT_TEMPLATE, &form.fields())
}

/// Single-pass `{name}` substitution. Text inserted from `values` is never
/// rescanned, so a value containing `{team_dynamics}` stays literal.
/// Unknown placeholders are left as written.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(
        template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>(),
    );
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Headers of the five input sections, in template order.
    const INPUT_SECTION_HEADERS: [&str; 5] = [
        "**Company Information:**",
        "**Position Details:**",
        "**Project Requirements:**",
        "**Team Dynamics:**",
        "**Recruitment Goals:**",
    ];

    /// Headers of the seven plan sections the model is asked to write.
    const PLAN_SECTION_HEADERS: [&str; 7] = [
        "**1. Executive Summary:**",
        "**2. Position Overview:**",
        "**3. Required Skills and Qualifications:**",
        "**4. Project Context and Impact:**",
        "**5. Team Integration and Dynamics:**",
        "**6. Recruitment Strategy and Process:**",
        "**7. Goals and Success Metrics for the Hire:**",
    ];

    fn sample_form() -> HiringForm {
        HiringForm {
            company_information: "HealthTech startup, 50 employees".to_string(),
            position_details: "ML Engineer, Mid".to_string(),
            project_requirements: "NLP chatbot".to_string(),
            team_dynamics: "2 data scientists".to_string(),
            recruitment_goals: "3 months, diversity 40%".to_string(),
        }
    }

    #[test]
    fn test_prompt_places_each_input_under_its_header() {
        let form = sample_form();
        let prompt = build_plan_prompt(&form);

        for (header, (_, value)) in INPUT_SECTION_HEADERS.iter().zip(form.fields()) {
            let expected = format!("{header}\n{value}\n");
            assert!(prompt.contains(&expected), "missing section: {expected:?}");
        }
    }

    #[test]
    fn test_prompt_contains_all_plan_sections() {
        let prompt = build_plan_prompt(&sample_form());
        for header in PLAN_SECTION_HEADERS {
            assert!(prompt.contains(header), "missing {header}");
        }
        assert!(!prompt.contains("{company_information}"));
    }

    #[test]
    fn test_prompt_is_deterministic_and_framed_by_newlines() {
        let a = build_plan_prompt(&sample_form());
        let b = build_plan_prompt(&sample_form());
        assert_eq!(a, b);
        assert!(a.starts_with("\nGenerate a detailed AI/ML Hiring Plan"));
        assert!(a.ends_with("Use markdown for clear section headers.\n"));
    }

    #[test]
    fn test_inputs_pass_through_without_escaping() {
        let mut form = sample_form();
        form.project_requirements = "<script>alert(`x`)</script> & {\"json\": true}".to_string();
        let prompt = build_plan_prompt(&form);
        assert!(prompt.contains("<script>alert(`x`)</script> & {\"json\": true}"));
    }

    #[test]
    fn test_placeholders_inside_values_are_not_expanded() {
        let mut form = sample_form();
        form.company_information = "see {team_dynamics}".to_string();
        let prompt = build_plan_prompt(&form);
        assert!(prompt.contains("**Company Information:**\nsee {team_dynamics}\n"));
        assert!(prompt.contains("**Team Dynamics:**\n2 data scientists\n"));
    }

    #[test]
    fn test_fill_template_leaves_unknown_and_unclosed_braces() {
        let filled = fill_template("{a} {b} {unclosed", &[("a", "1")]);
        assert_eq!(filled, "1 {b} {unclosed");
    }
}
