use rand::Rng;

use super::{
    enums::model_type::ModelType,
    models::{generated_prompt::GeneratedPrompt, prompt_request::PromptRequest},
};

pub const TECHNIQUES: [&str; 5] = [
    "Imagine a scenario where",
    "Create a hypothetical situation involving",
    "Develop a creative narrative about",
    "Design a conceptual framework for",
    "Construct an artistic interpretation of",
];

const BOUNDARY_CLAUSE: &str =
    "Focus on creative expression while maintaining appropriate boundaries.";

pub fn generate_prompt(request: &PromptRequest) -> GeneratedPrompt {
    let safe_prompt = generate_safe_prompt(&request.original_prompt, request.model_type.as_deref());

    GeneratedPrompt {
        success: true,
        safe_prompt,
        original_prompt: request.original_prompt.to_string(),
        model_type: request.model_type.clone(),
    }
}

pub fn generate_safe_prompt(original_prompt: &str, model_type: Option<&str>) -> String {
    generate_safe_prompt_with(&mut rand::thread_rng(), original_prompt, model_type)
}

pub fn generate_safe_prompt_with<R: Rng + ?Sized>(
    rng: &mut R,
    original_prompt: &str,
    model_type: Option<&str>,
) -> String {
    let technique = TECHNIQUES[rng.gen_range(0..TECHNIQUES.len())];
    let clause = ModelType::from_tag(model_type).clause();

    format!(
        "{} {}. {} {}",
        technique,
        original_prompt.to_lowercase(),
        BOUNDARY_CLAUSE,
        clause
    )
}
