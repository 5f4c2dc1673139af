use autoreel_core::{AnalyticsMetrics, AudienceInsights, PerformanceChart, TimeRange, TopReels};

use crate::{AutoreelClient, ClientError};

impl AutoreelClient {
    /// `GET /analytics/metrics?time_range=`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn analytics_metrics(
        &self,
        range: TimeRange,
    ) -> Result<AnalyticsMetrics, ClientError> {
        self.get_json("/analytics/metrics", &[("time_range", range.as_str())])
            .await
    }

    /// `GET /analytics/top-reels`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn analytics_top_reels(&self) -> Result<TopReels, ClientError> {
        self.get_json("/analytics/top-reels", &[]).await
    }

    /// `GET /analytics/audience-insights`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn audience_insights(&self) -> Result<AudienceInsights, ClientError> {
        self.get_json("/analytics/audience-insights", &[]).await
    }

    /// `GET /analytics/performance-chart?time_range=`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn performance_chart(
        &self,
        range: TimeRange,
    ) -> Result<PerformanceChart, ClientError> {
        self.get_json(
            "/analytics/performance-chart",
            &[("time_range", range.as_str())],
        )
        .await
    }
}
