pub mod model_type;
