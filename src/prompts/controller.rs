use axum::Json;

use crate::app::models::{api_error::ApiError, json_or_form::JsonOrForm};

use super::{
    dtos::generate_prompt_dto::GeneratePromptDto, models::generated_prompt::GeneratedPrompt,
    service,
};

pub async fn generate_prompt(
    JsonOrForm(dto): JsonOrForm<GeneratePromptDto>,
) -> Result<Json<GeneratedPrompt>, ApiError> {
    match dto.to_request() {
        Ok(request) => Ok(Json(service::generate_prompt(&request))),
        Err(e) => Err(e),
    }
}
