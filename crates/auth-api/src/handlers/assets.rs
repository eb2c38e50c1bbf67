use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
};

use auth_shared::constants::API_PREFIX;

use crate::error::ApiError;
use crate::state::AppState;

/// Router fallback: anything under the API prefix that no route claimed is a
/// JSON 404, everything else goes to the static asset responder.
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    if uri.path().starts_with(API_PREFIX) {
        return ApiError::NotFound.into_response();
    }

    state.static_files.serve(uri.path()).await
}
