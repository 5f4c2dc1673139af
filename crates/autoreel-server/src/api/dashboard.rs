use autoreel_core::engagement::{growth, percentage, rank_top_reels, top_reel};
use autoreel_core::{ActivityFeed, ActivityItem, DashboardStats, TopReels};
use axum::{extract::State, Extension, Json};
use chrono::Utc;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, AppState};

const RECENT_ACTIVITY_LIMIT: i64 = 10;
const TOP_REELS_CANDIDATES: i64 = 10;
const TOP_REELS_SHOWN: usize = 3;

pub(super) async fn stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<DashboardStats>, ApiError> {
    let counts = autoreel_db::dashboard_counts(&state.pool, Utc::now())
        .await
        .map_err(|e| map_db_error(req_id.0, &e))?;

    Ok(Json(DashboardStats {
        total_videos: counts.total_videos,
        active_profiles: counts.active_profiles,
        posts_today: counts.posts_today,
        success_rate: percentage(counts.posted, counts.total_videos),
        posts_yesterday: counts.posts_yesterday,
        monthly_growth: growth(counts.last_30_days, counts.previous_30_days),
    }))
}

pub(super) async fn recent_activity(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ActivityFeed>, ApiError> {
    let rows = autoreel_db::list_logs(&state.pool, None, RECENT_ACTIVITY_LIMIT)
        .await
        .map_err(|e| map_db_error(req_id.0, &e))?;

    let activity = rows
        .into_iter()
        .map(|row| ActivityItem {
            id: row.id,
            level: row.level,
            message: row.message,
            created_at: row.created_at,
            context: row.context.unwrap_or_default(),
        })
        .collect();

    Ok(Json(ActivityFeed { activity }))
}

pub(super) async fn top_performing_reels(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<TopReels>, ApiError> {
    let rows = autoreel_db::list_recent_posted_reels(&state.pool, TOP_REELS_CANDIDATES)
        .await
        .map_err(|e| map_db_error(req_id.0, &e))?;

    let candidates = rows
        .iter()
        .map(|r| top_reel(&r.instagram_reel_code, r.caption.as_deref(), r.posted_at))
        .collect();

    Ok(Json(TopReels {
        top_reels: rank_top_reels(candidates, TOP_REELS_SHOWN),
    }))
}
