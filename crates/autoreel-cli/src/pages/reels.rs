use std::fmt::Write as _;

use autoreel_client::{AutoreelClient, ClientError};
use autoreel_core::format::truncate;
use autoreel_core::{format_count, format_time_ago, Reel, ReelList, ReelStats, ReelStatus};
use chrono::{DateTime, Utc};

use super::{stat_line, Page};

const CAPTION_MAX_CHARS: usize = 30;

/// Reel listing, optionally restricted to one status.
pub struct ReelsPage {
    pub status: Option<ReelStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReelsData {
    pub reels: ReelList,
    pub stats: ReelStats,
}

impl ReelsPage {
    /// Reels to display. The filter is applied here too, so a backend that
    /// ignores `?status=` cannot leak other statuses into the view.
    #[must_use]
    pub fn visible<'a>(&self, data: &'a ReelsData) -> Vec<&'a Reel> {
        data.reels
            .reels
            .iter()
            .filter(|r| self.status.is_none_or(|s| r.status == s))
            .collect()
    }
}

impl Page for ReelsPage {
    type Data = ReelsData;

    const COMMAND: &'static str = "reels";
    const LOADING: &'static str = "Carregando reels...";

    async fn fetch(&self, client: &AutoreelClient) -> Result<ReelsData, ClientError> {
        let (reels, stats) =
            tokio::try_join!(client.list_reels(self.status), client.reel_stats())?;
        Ok(ReelsData { reels, stats })
    }

    fn render_ready(&self, data: &ReelsData, now: DateTime<Utc>) -> String {
        let stats = &data.stats;
        let mut out = String::new();

        out.push_str("Vídeos & Reels\n");
        out.push_str("Acompanhe todos os seus vídeos baixados e publicados\n\n");
        out.push_str(&stat_line("Total", &format_count(stats.total_reels), ""));
        out.push_str(&stat_line(
            "Baixados",
            &format_count(stats.downloaded_reels),
            "",
        ));
        out.push_str(&stat_line(
            "Publicados",
            &format_count(stats.posted_reels),
            "",
        ));
        out.push_str(&stat_line(
            "Visualizações",
            &format_count(stats.total_views),
            "",
        ));
        out.push_str(&stat_line("Curtidas", &format_count(stats.total_likes), ""));

        out.push_str("\nReels & Vídeos\n");
        if let Some(status) = self.status {
            let _ = writeln!(out, "  Filtro: {}", status.label());
        }

        let reels = self.visible(data);
        if reels.is_empty() {
            out.push_str("  Nenhum reel encontrado\n");
            out.push_str("  Nenhum reel foi baixado ainda. Configure perfis para monitorar!\n");
            return out;
        }

        let _ = writeln!(
            out,
            "  {:<12}{:<36}{:<22}{:<13}{:<10}{:<9}CRIADO",
            "CÓDIGO", "TÍTULO", "PERFIL", "STATUS", "VIEWS", "LIKES"
        );
        for reel in reels {
            let title = reel
                .caption
                .as_deref()
                .filter(|c| !c.is_empty())
                .map_or_else(|| "Sem título".to_string(), |c| truncate(c, CAPTION_MAX_CHARS));
            let profile = reel
                .profile
                .as_ref()
                .map_or("Perfil desconhecido", |p| p.username.as_str());
            let (views, likes) = reel.analytics.as_ref().map_or_else(
                || ("-".to_string(), "-".to_string()),
                |a| (format_count(a.views), format_count(a.likes)),
            );
            let _ = writeln!(
                out,
                "  {:<12}{:<36}{:<22}{:<13}{:<10}{:<9}{}",
                reel.instagram_reel_code,
                title,
                profile,
                reel.status.label(),
                views,
                likes,
                format_time_ago(reel.created_at, now),
            );
        }

        out
    }
}
