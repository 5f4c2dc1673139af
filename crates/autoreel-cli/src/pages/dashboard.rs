use std::fmt::Write as _;

use autoreel_client::{AutoreelClient, ClientError};
use autoreel_core::format::{format_growth, format_time_ago_or};
use autoreel_core::{
    format_count, format_percent, format_time_ago, ActivityFeed, DashboardStats, TopReels,
};
use chrono::{DateTime, Utc};

use super::{stat_line, Page};

pub struct DashboardPage;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub activity: ActivityFeed,
    pub top_reels: TopReels,
}

impl Page for DashboardPage {
    type Data = DashboardData;

    const COMMAND: &'static str = "dashboard";
    const LOADING: &'static str = "Carregando dados...";

    async fn fetch(&self, client: &AutoreelClient) -> Result<DashboardData, ClientError> {
        let (stats, activity, top_reels) = tokio::try_join!(
            client.dashboard_stats(),
            client.recent_activity(),
            client.dashboard_top_reels(),
        )?;
        Ok(DashboardData {
            stats,
            activity,
            top_reels,
        })
    }

    fn render_ready(&self, data: &DashboardData, now: DateTime<Utc>) -> String {
        let stats = &data.stats;
        let mut out = String::new();

        out.push_str("Dashboard\n");
        out.push_str("Bem-vindo de volta! Aqui está um resumo da sua atividade\n\n");

        out.push_str(&stat_line(
            "Total de Vídeos",
            &format_count(stats.total_videos),
            &format!("{} este mês", format_growth(stats.monthly_growth)),
        ));
        out.push_str(&stat_line(
            "Perfis Ativos",
            &format_count(stats.active_profiles),
            "Monitorando",
        ));
        out.push_str(&stat_line(
            "Posts Hoje",
            &format_count(stats.posts_today),
            &posts_today_note(stats),
        ));
        out.push_str(&stat_line(
            "Taxa de Sucesso",
            &format_percent(stats.success_rate),
            success_label(stats.success_rate),
        ));

        out.push_str("\nAtividade Recente\n");
        if data.activity.activity.is_empty() {
            out.push_str("  Nenhuma atividade recente\n");
        }
        for item in &data.activity.activity {
            let source = item
                .context
                .get("task_id")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("Sistema");
            let _ = writeln!(
                out,
                "  {:<9}{:<16}{:<14}{}",
                item.level,
                format_time_ago(item.created_at, now),
                source,
                item.message
            );
        }

        out.push_str("\nTop Reels\n");
        for (rank, reel) in data.top_reels.top_reels.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {}  Views: {}  Likes: {}  Engajamento: {}  ({})",
                rank + 1,
                reel.title,
                format_count(reel.views),
                format_count(reel.likes),
                format_percent(reel.engagement),
                format_time_ago_or(reel.posted_at, now, "Data não disponível"),
            );
        }

        out
    }
}

fn posts_today_note(stats: &DashboardStats) -> String {
    if stats.posts_yesterday == 0 {
        return "Novo hoje".to_string();
    }
    let diff = stats.posts_today - stats.posts_yesterday;
    if diff >= 0 {
        format!("+{diff} vs ontem")
    } else {
        format!("{diff} vs ontem")
    }
}

fn success_label(rate: f64) -> &'static str {
    if rate >= 95.0 {
        "Excelente!"
    } else if rate >= 80.0 {
        "Bom"
    } else {
        "Pode melhorar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(today: i64, yesterday: i64) -> DashboardStats {
        DashboardStats {
            total_videos: 0,
            active_profiles: 0,
            posts_today: today,
            success_rate: 0.0,
            posts_yesterday: yesterday,
            monthly_growth: 0.0,
        }
    }

    #[test]
    fn posts_today_note_compares_with_yesterday() {
        assert_eq!(posts_today_note(&stats(3, 0)), "Novo hoje");
        assert_eq!(posts_today_note(&stats(3, 1)), "+2 vs ontem");
        assert_eq!(posts_today_note(&stats(1, 3)), "-2 vs ontem");
    }

    #[test]
    fn success_label_thresholds() {
        assert_eq!(success_label(97.0), "Excelente!");
        assert_eq!(success_label(80.0), "Bom");
        assert_eq!(success_label(79.9), "Pode melhorar");
    }
}
