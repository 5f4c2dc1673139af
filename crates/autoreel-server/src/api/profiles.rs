use autoreel_core::{Profile, ProfileList, ProfileStats};
use axum::{extract::State, Extension, Json};

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, AppState};

pub(super) async fn list_profiles(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ProfileList>, ApiError> {
    let rows = autoreel_db::list_profiles(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0, &e))?;

    let profiles = rows
        .into_iter()
        .map(|row| Profile {
            id: row.id,
            display_name: row
                .display_name
                .unwrap_or_else(|| row.instagram_username.clone()),
            username: row.instagram_username,
            profile_picture_url: row.profile_picture_url,
            is_active: row.is_active,
            last_checked_at: row.last_checked_at,
            last_posted_at: row.last_posted_at,
            check_interval_minutes: row.check_interval_minutes,
            posts_count: row.posts_count,
            created_at: row.created_at,
        })
        .collect();

    Ok(Json(ProfileList { profiles }))
}

pub(super) async fn profile_stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ProfileStats>, ApiError> {
    let counts = autoreel_db::profile_counts(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0, &e))?;

    Ok(Json(ProfileStats {
        total_profiles: counts.total_profiles,
        active_profiles: counts.active_profiles,
        total_posts: counts.total_posts,
    }))
}
