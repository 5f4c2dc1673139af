use autoreel_core::engagement::{
    listing_analytics, rank_top_reels, top_reel, AVG_LIKES_PER_POST, AVG_VIEWS_PER_POST,
};
use autoreel_core::{Reel, ReelList, ReelProfile, ReelStats, ReelStatus, TopReels};
use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, AppState};

const TOP_REELS_CANDIDATES: i64 = 10;
const TOP_REELS_SHOWN: usize = 5;

#[derive(Debug, Deserialize)]
pub(super) struct ReelQuery {
    pub status: Option<String>,
}

pub(super) async fn list_reels(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ReelQuery>,
) -> Result<Json<ReelList>, ApiError> {
    let status = match query.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<ReelStatus>().map_err(|e| {
            ApiError::new(req_id.0.clone(), "bad_request", e.to_string())
        })?),
    };

    let rows = autoreel_db::list_reels(&state.pool, status.map(ReelStatus::as_str))
        .await
        .map_err(|e| map_db_error(req_id.0, &e))?;

    let reels = rows
        .into_iter()
        .map(|row| {
            let status = ReelStatus::from_db(&row.status);
            let analytics =
                (status == ReelStatus::Posted).then(|| listing_analytics(&row.instagram_reel_code));
            Reel {
                id: row.id,
                instagram_reel_code: row.instagram_reel_code,
                instagram_reel_url: row.instagram_reel_url,
                caption: row.caption,
                status,
                video_file_path: row.video_file_path,
                tiktok_post_id: row.tiktok_post_id,
                tiktok_post_url: row.tiktok_post_url,
                posted_at: row.posted_at,
                created_at: row.created_at,
                profile: Some(ReelProfile {
                    display_name: row
                        .profile_display_name
                        .unwrap_or_else(|| row.profile_username.clone()),
                    username: row.profile_username,
                }),
                analytics,
            }
        })
        .collect();

    Ok(Json(ReelList { reels }))
}

pub(super) async fn reel_stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ReelStats>, ApiError> {
    let counts = autoreel_db::reel_counts(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0, &e))?;

    Ok(Json(ReelStats {
        total_reels: counts.total,
        downloaded_reels: counts.pending,
        posted_reels: counts.posted,
        total_views: counts.posted * AVG_VIEWS_PER_POST,
        total_likes: counts.posted * AVG_LIKES_PER_POST,
    }))
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
