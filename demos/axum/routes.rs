use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse},
};

use crate::protection::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><form method=\"post\" action=\"/transfer\"><button>Transfer</button></form>",
        state.greeting
    ))
}

pub async fn transfer() -> impl IntoResponse {
    "transfer accepted"
}

pub async fn webhook(Path(provider): Path<String>) -> impl IntoResponse {
    format!("webhook from {provider} accepted")
}
