//! Hiring plan generation — orchestrates the plan pipeline.
//!
//! Flow: validate form → build prompt → one completion call → append closing.
//!
//! The toy predictor is deliberately not called from here: it is advisory and
//! is run by the handler next to this pipeline, never inside it.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{CompletionBackend, LlmError};
use crate::planning::form::HiringForm;
use crate::planning::prompts::{build_plan_prompt, CLOSING_SENTENCE};

/// A plan ready to display: model text plus the closing sentence.
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub plan_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub text: String,
}

/// Appends the fixed closing sentence to a completion.
pub fn finalize_plan_text(completion: &str) -> String {
    format!("{completion}\n\n{CLOSING_SENTENCE}")
}

/// Runs the plan pipeline for one submission.
///
/// Validation failures return before any outbound call is made.
pub async fn generate_plan(
    form: &HiringForm,
    backend: &dyn CompletionBackend,
) -> Result<GeneratedPlan, AppError> {
    form.validate()?;

    let prompt = build_plan_prompt(form);
    info!(
        "Requesting hiring plan from {} (prompt {} chars)",
        backend.model(),
        prompt.chars().count()
    );

    let completion = backend.complete(&prompt).await.map_err(|e| match e {
        LlmError::EmptyContent => AppError::EmptyCompletion,
        other => AppError::Generation(other.to_string()),
    })?;

    let plan = GeneratedPlan {
        plan_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        text: finalize_plan_text(&completion),
    };
    info!(
        "Generated plan {} ({} chars)",
        plan.plan_id,
        plan.text.chars().count()
    );

    Ok(plan)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// What a `ScriptedBackend` answers with.
    pub enum Reply {
        Text(String),
        Empty,
        ApiError(u16, String),
    }

    /// Backend returning a canned reply and recording each prompt it receives.
    pub struct ScriptedBackend {
        reply: Reply,
        pub calls: AtomicUsize,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        pub fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Reply::Text(text) => Ok(text.clone()),
                Reply::Empty => Err(LlmError::EmptyContent),
                Reply::ApiError(status, message) => Err(LlmError::Api {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }

        fn model(&self) -> &str {
            "scripted"
        }
    }

    pub fn sample_form() -> HiringForm {
        HiringForm {
            company_information: "HealthTech startup, 50 employees".to_string(),
            position_details: "ML Engineer, Mid".to_string(),
            project_requirements: "NLP chatbot".to_string(),
            team_dynamics: "2 data scientists".to_string(),
            recruitment_goals: "3 months, diversity 40%".to_string(),
        }
    }

    #[tokio::test]
    async fn test_plan_is_completion_plus_closing_sentence() {
        let backend = ScriptedBackend::new(Reply::Text("Plan X".to_string()));
        let plan = generate_plan(&sample_form(), &backend).await.unwrap();

        assert_eq!(
            plan.text,
            "Plan X\n\nThis plan provides a framework for a successful and efficient \
             recruitment process. Regular review and adjustment based on progress and \
             market conditions will be essential."
        );
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_backend_receives_assembled_prompt() {
        let backend = ScriptedBackend::new(Reply::Text("ok".to_string()));
        let form = sample_form();
        generate_plan(&form, &backend).await.unwrap();

        let prompts = backend.prompts.lock().unwrap();
        assert_eq!(prompts.as_slice(), &[build_plan_prompt(&form)]);
    }

    #[tokio::test]
    async fn test_empty_field_makes_no_outbound_call() {
        let backend = ScriptedBackend::new(Reply::Text("unused".to_string()));
        let mut form = sample_form();
        form.recruitment_goals = String::new();

        let err = generate_plan(&form, &backend).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_only_field_is_sent_verbatim() {
        let backend = ScriptedBackend::new(Reply::Text("Plan X".to_string()));
        let mut form = sample_form();
        form.team_dynamics = " ".to_string();

        let plan = generate_plan(&form, &backend).await.unwrap();
        assert!(plan.text.starts_with("Plan X\n\n"));
        assert_eq!(backend.call_count(), 1);
        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].contains("**Team Dynamics:**\n \n"));
    }

    #[tokio::test]
    async fn test_empty_completion_is_distinct_error() {
        let backend = ScriptedBackend::new(Reply::Empty);
        let err = generate_plan(&sample_form(), &backend).await.unwrap_err();
        assert!(matches!(err, AppError::EmptyCompletion));
        assert_eq!(backend.call_count(), 1, "empty completion must not be retried");
    }

    #[tokio::test]
    async fn test_api_failure_carries_underlying_message() {
        let backend = ScriptedBackend::new(Reply::ApiError(403, "API key not valid.".to_string()));
        match generate_plan(&sample_form(), &backend).await {
            Err(AppError::Generation(msg)) => assert!(msg.contains("API key not valid.")),
            other => panic!("expected generation error, got {other:?}"),
        }
        assert_eq!(backend.call_count(), 1);
    }
}
