// Career analysis pipeline: prompt construction, LLM calls, SWOT recovery.
// All LLM calls go through llm_client - no direct Generative Language API calls here.

pub mod handlers;
pub mod prompts;
pub mod swot;
