pub mod generate_prompt_dto;
