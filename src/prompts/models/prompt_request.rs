/// A generate request whose required fields have been checked.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    // presence-checked only; no provider consumes it yet
    #[allow(dead_code)]
    pub api_key: String,
    pub model_type: Option<String>,
    pub original_prompt: String,
}
