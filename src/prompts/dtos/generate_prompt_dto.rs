use serde::{Deserialize, Serialize};

use crate::{
    app::models::api_error::ApiError,
    prompts::{errors::PromptsApiError, models::prompt_request::PromptRequest},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePromptDto {
    pub api_key: Option<String>,
    pub model_type: Option<String>,
    pub original_prompt: Option<String>,
}

impl GeneratePromptDto {
    /// Checks the required fields in order, api key first. Empty strings count as missing.
    pub fn to_request(&self) -> Result<PromptRequest, ApiError> {
        let Some(api_key) = self.api_key.as_deref().filter(|value| !value.is_empty()) else {
            return Err(PromptsApiError::ApiKeyRequired.value());
        };

        let Some(original_prompt) = self
            .original_prompt
            .as_deref()
            .filter(|value| !value.is_empty())
        else {
            return Err(PromptsApiError::OriginalPromptRequired.value());
        };

        return Ok(PromptRequest {
            api_key: api_key.to_string(),
            model_type: self.model_type.clone(),
            original_prompt: original_prompt.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    fn dto(api_key: Option<&str>, original_prompt: Option<&str>) -> GeneratePromptDto {
        GeneratePromptDto {
            api_key: api_key.map(str::to_string),
            model_type: Some("text".to_string()),
            original_prompt: original_prompt.map(str::to_string),
        }
    }

    #[test]
    fn deserializes_camel_case_body() {
        let dto: GeneratePromptDto = serde_json::from_str(
            r#"{"apiKey":"k","modelType":"image","originalPrompt":"A Cat"}"#,
        )
        .unwrap();

        assert_eq!(dto.api_key.as_deref(), Some("k"));
        assert_eq!(dto.model_type.as_deref(), Some("image"));
        assert_eq!(dto.original_prompt.as_deref(), Some("A Cat"));
    }

    #[test]
    fn missing_api_key_is_reported_first() {
        let e = dto(None, None).to_request().unwrap_err();

        assert_eq!(e.code, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "API key is required");
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let e = dto(Some(""), Some("hello")).to_request().unwrap_err();

        assert_eq!(e.message, "API key is required");
    }

    #[test]
    fn missing_prompt_is_rejected() {
        let e = dto(Some("k"), None).to_request().unwrap_err();
        assert_eq!(e.message, "Original prompt is required");

        let e = dto(Some("k"), Some("")).to_request().unwrap_err();
        assert_eq!(e.message, "Original prompt is required");
    }

    #[test]
    fn keeps_fields_when_present() {
        let request = dto(Some("k"), Some("A Cat")).to_request().unwrap();

        assert_eq!(request.api_key, "k");
        assert_eq!(request.original_prompt, "A Cat");
        assert_eq!(request.model_type.as_deref(), Some("text"));
    }

    #[test]
    fn accepts_long_prompt() {
        let long_prompt = "a".repeat(5000);
        let request = dto(Some("k"), Some(&long_prompt)).to_request().unwrap();

        assert_eq!(request.original_prompt.len(), 5000);
    }

    #[test]
    fn default_dto_reports_api_key() {
        let e = GeneratePromptDto::default().to_request().unwrap_err();

        assert_eq!(e.message, "API key is required");
    }
}
