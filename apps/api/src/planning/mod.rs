// Hiring plan pipeline: form validation, prompt assembly, generation, download.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod form;
pub mod generator;
pub mod handlers;
pub mod presenter;
pub mod prompts;
