// GET /api/summary/{username}: run one fetch cycle and return the card.
//
// The response has both the display strings (`view`) and the raw totals
// (`summary`) so a frontend can either print the card as-is or do its own
// formatting.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::hivesql::queries::validate_account_name;
use crate::output::SummaryView;
use crate::web::{api_error, AppState};

pub async fn get_summary(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Response {
    let username = username.trim_start_matches('@').to_lowercase();
    if let Err(e) = validate_account_name(&username) {
        return api_error(StatusCode::BAD_REQUEST, &e.to_string());
    }

    match state.fetcher.fetch(&username).await {
        Ok(summary) => {
            let view = SummaryView::from_summary(&summary);
            Json(serde_json::json!({
                "view": view,
                "summary": summary,
            }))
            .into_response()
        }
        Err(e) => {
            warn!(username = %username, error = %e, "Summary fetch failed");
            api_error(StatusCode::BAD_GATEWAY, &format!("{e:#}"))
        }
    }
}
