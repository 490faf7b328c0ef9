use axum::extract::State;

use crate::app_state::AppState;

pub const HELLO_BODY: &str = "hello world";

/// `GET /hello`: count the call, then greet.
pub async fn hello(State(state): State<AppState>) -> &'static str {
    if let Err(e) = state.hello_counter().inc() {
        tracing::warn!(code = e.code().as_str(), error = %e, "hello counter not incremented");
    }
    tracing::info!("Hello World!");
    HELLO_BODY
}
