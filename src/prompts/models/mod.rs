pub mod generated_prompt;
pub mod prompt_request;
