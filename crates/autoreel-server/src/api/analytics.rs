use autoreel_core::engagement::{
    chart_series, engagement_rate, rank_top_reels, top_reel, AVG_LIKES_PER_POST,
    AVG_SHARES_PER_POST, AVG_VIEWS_PER_POST,
};
use autoreel_core::{
    AnalyticsMetrics, AudienceInsights, ContentPerformance, Demographics, EngagementPatterns,
    PerformanceChart, TimeRange, TopReels,
};
use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, AppState};

const TOP_REELS_CANDIDATES: i64 = 20;
const TOP_REELS_SHOWN: usize = 10;
const GROWTH_PERCENTAGE: f64 = 12.5;

#[derive(Debug, Deserialize)]
pub(super) struct RangeQuery {
    pub time_range: Option<String>,
}

pub(super) async fn metrics(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<AnalyticsMetrics>, ApiError> {
    let time_range = TimeRange::parse_or_default(query.time_range.as_deref());
    let counts = autoreel_db::reel_counts(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0, &e))?;

    let total_views = counts.posted * AVG_VIEWS_PER_POST;
    let total_likes = counts.posted * AVG_LIKES_PER_POST;

    Ok(Json(AnalyticsMetrics {
        total_views,
        total_likes,
        total_shares: counts.posted * AVG_SHARES_PER_POST,
        avg_engagement: engagement_rate(total_likes, total_views),
        growth_percentage: GROWTH_PERCENTAGE,
        time_range,
    }))
}

pub(super) async fn top_reels(
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

pub(super) async fn audience_insights() -> Json<AudienceInsights> {
    Json(audience_baseline())
}

pub(super) async fn performance_chart(Query(query): Query<RangeQuery>) -> Json<PerformanceChart> {
    let time_range = TimeRange::parse_or_default(query.time_range.as_deref());
    Json(PerformanceChart {
        chart_data: chart_series(Utc::now().date_naive(), time_range.days()),
    })
}

/// Audience profile served until a real analytics source is connected.
pub(super) fn audience_baseline() -> AudienceInsights {
    AudienceInsights {
        demographics: Demographics {
            top_country: "Brasil".to_string(),
            country_percentage: 65.0,
            age_range: "18-34".to_string(),
            age_percentage: 78.0,
            device: "Mobile".to_string(),
            device_percentage: 85.0,
        },
        engagement_patterns: EngagementPatterns {
            best_posting_time: "19:00-21:00".to_string(),
            best_day: "Sexta-feira".to_string(),
            avg_watch_time: "45 segundos".to_string(),
            completion_rate: 68.0,
        },
        content_performance: ContentPerformance {
            most_engaging_type: "Tutoriais".to_string(),
            avg_engagement_rate: 8.2,
            viral_threshold: 10_000.0,
            top_hashtags: vec![
                "#fitness".to_string(),
                "#motivacao".to_string(),
                "#saude".to_string(),
            ],
        },
    }
}
