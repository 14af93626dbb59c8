use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPrompt {
    pub success: bool,
    pub safe_prompt: String,
    pub original_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
}
