use axum::{response::Html, Json};
use serde_json::{json, Value};

use super::{config, views::index_template::index_template};

pub async fn get_root() -> Html<String> {
    Html(index_template(config::APP_TITLE, config::APP_CREATOR))
}

pub async fn get_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
