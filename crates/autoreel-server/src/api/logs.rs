use autoreel_core::logs::normalize_level;
use autoreel_core::{LogEntry, LogList};
use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_db_error, normalize_limit, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct LogQuery {
    pub level: Option<String>,
    pub limit: Option<i64>,
}

pub(super) async fn list_logs(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogList>, ApiError> {
    let level = match query.level.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(normalize_level(raw).ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "bad_request",
                format!("unknown log level: {raw}"),
            )
        })?),
    };

    let rows = autoreel_db::list_logs(&state.pool, level, normalize_limit(query.limit))
        .await
        .map_err(|e| map_db_error(req_id.0, &e))?;

    let logs = rows
        .into_iter()
        .map(|row| LogEntry {
            id: row.id,
            level: row.level,
            message: row.message,
            created_at: row.created_at,
            context: row.context.unwrap_or_default(),
        })
        .collect();

    Ok(Json(LogList { logs }))
}
