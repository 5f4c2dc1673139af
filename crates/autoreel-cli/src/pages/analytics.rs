use std::fmt::Write as _;

use autoreel_client::{AutoreelClient, ClientError};
use autoreel_core::format::{format_growth, format_number, format_time_ago_or};
use autoreel_core::{
    format_count, format_percent, AnalyticsMetrics, AudienceInsights, PerformanceChart,
    TimeRange, TopReels,
};
use chrono::{DateTime, Utc};

use super::{stat_line, Page};

pub struct AnalyticsPage {
    pub range: TimeRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsData {
    pub metrics: AnalyticsMetrics,
    pub top_reels: TopReels,
    pub insights: AudienceInsights,
    pub chart: PerformanceChart,
}

fn range_label(range: TimeRange) -> &'static str {
    match range {
        TimeRange::SevenDays => "Últimos 7 dias",
        TimeRange::ThirtyDays => "Últimos 30 dias",
        TimeRange::NinetyDays => "Últimos 90 dias",
        TimeRange::OneYear => "Último ano",
    }
}

impl Page for AnalyticsPage {
    type Data = AnalyticsData;

    const COMMAND: &'static str = "analytics";
    const LOADING: &'static str = "Carregando analytics...";

    async fn fetch(&self, client: &AutoreelClient) -> Result<AnalyticsData, ClientError> {
        let (metrics, top_reels, insights, chart) = tokio::try_join!(
            client.analytics_metrics(self.range),
            client.analytics_top_reels(),
            client.audience_insights(),
            client.performance_chart(self.range),
        )?;
        Ok(AnalyticsData {
            metrics,
            top_reels,
            insights,
            chart,
        })
    }

    fn render_ready(&self, data: &AnalyticsData, now: DateTime<Utc>) -> String {
        let m = &data.metrics;
        let mut out = String::new();

        out.push_str("Analytics & Insights\n");
        let _ = writeln!(out, "Período: {}\n", range_label(self.range));

        out.push_str(&stat_line(
            "Visualizações",
            &format_count(m.total_views),
            &format_growth(m.growth_percentage),
        ));
        out.push_str(&stat_line("Curtidas", &format_count(m.total_likes), ""));
        out.push_str(&stat_line(
            "Compartilhamentos",
            &format_count(m.total_shares),
            "",
        ));
        out.push_str(&stat_line(
            "Engajamento Médio",
            &format_percent(m.avg_engagement),
            "",
        ));

        out.push_str("\nTop Reels\n");
        for (rank, reel) in data.top_reels.top_reels.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:>2}. {:<54}{:>9} views {:>7} likes {:>7}  {}",
                rank + 1,
                reel.title,
                format_count(reel.views),
                format_count(reel.likes),
                format_percent(reel.engagement),
                format_time_ago_or(reel.posted_at, now, "Data não disponível"),
            );
        }

        let d = &data.insights.demographics;
        let e = &data.insights.engagement_patterns;
        let c = &data.insights.content_performance;
        out.push_str("\nAudiência\n");
        out.push_str(&stat_line(
            "País Principal",
            &d.top_country,
            &format_percent(d.country_percentage),
        ));
        out.push_str(&stat_line(
            "Faixa Etária",
            &d.age_range,
            &format_percent(d.age_percentage),
        ));
        out.push_str(&stat_line(
            "Dispositivo",
            &d.device,
            &format_percent(d.device_percentage),
        ));
        out.push_str(&stat_line("Melhor Horário", &e.best_posting_time, ""));
        out.push_str(&stat_line("Melhor Dia", &e.best_day, ""));
        out.push_str(&stat_line("Tempo Médio de Visualização", &e.avg_watch_time, ""));
        out.push_str(&stat_line(
            "Taxa de Conclusão",
            &format_percent(e.completion_rate),
            "",
        ));
        out.push_str(&stat_line("Tipo Mais Engajante", &c.most_engaging_type, ""));
        out.push_str(&stat_line(
            "Taxa Média de Engajamento",
            &format_percent(c.avg_engagement_rate),
            "",
        ));
        out.push_str(&stat_line(
            "Limite Viral",
            &format_number(c.viral_threshold),
            "",
        ));
        out.push_str(&stat_line(
            "Hashtags Populares",
            &c.top_hashtags.join(" "),
            "",
        ));

        out.push_str("\nDesempenho diário\n");
        let _ = writeln!(
            out,
            "  {:<12}{:>8}{:>8}{:>7}{:>13}",
            "DATA", "VIEWS", "LIKES", "POSTS", "ENGAJAMENTO"
        );
        for point in &data.chart.chart_data {
            let _ = writeln!(
                out,
                "  {:<12}{:>8}{:>8}{:>7}{:>13}",
                point.date.format("%Y-%m-%d").to_string(),
                format_count(point.views),
                format_count(point.likes),
                point.posts,
                format_percent(point.engagement),
            );
        }

        out
    }
}
