use std::fmt::Write as _;

use autoreel_client::{AutoreelClient, ClientError};
use autoreel_core::format::format_time_ago_or;
use autoreel_core::{format_count, ProfileList, ProfileStats};
use chrono::{DateTime, Utc};

use super::{stat_line, Page};

pub struct ProfilesPage;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfilesData {
    pub profiles: ProfileList,
    pub stats: ProfileStats,
}

impl Page for ProfilesPage {
    type Data = ProfilesData;

    const COMMAND: &'static str = "profiles";
    const LOADING: &'static str = "Carregando perfis...";

    async fn fetch(&self, client: &AutoreelClient) -> Result<ProfilesData, ClientError> {
        let (profiles, stats) = tokio::try_join!(client.list_profiles(), client.profile_stats())?;
        Ok(ProfilesData { profiles, stats })
    }

    fn render_ready(&self, data: &ProfilesData, now: DateTime<Utc>) -> String {
        let mut out = String::new();

        out.push_str("Perfis do Instagram\n");
        out.push_str("Gerencie os perfis que você está monitorando\n\n");
        out.push_str(&stat_line(
            "Total de Perfis",
            &format_count(data.stats.total_profiles),
            "Monitorados",
        ));
        out.push_str(&stat_line(
            "Perfis Ativos",
            &format_count(data.stats.active_profiles),
            "Funcionando",
        ));
        out.push_str(&stat_line(
            "Total de Posts",
            &format_count(data.stats.total_posts),
            "Publicados",
        ));

        out.push_str("\nPerfis Monitorados\n");
        let profiles = &data.profiles.profiles;
        if profiles.is_empty() {
            out.push_str("  Nenhum perfil encontrado\n");
            out.push_str("  Adicione perfis do Instagram para começar a monitorar\n");
            return out;
        }

        let _ = writeln!(
            out,
            "  {:<22}{:<22}{:<9}{:<11}{:<8}{:<20}ÚLTIMO POST",
            "USUÁRIO", "NOME", "STATUS", "INTERVALO", "POSTS", "ÚLTIMA VERIFICAÇÃO"
        );
        for profile in profiles {
            let status = if profile.is_active { "Ativo" } else { "Inativo" };
            let interval = format!("{} min", profile.check_interval_minutes);
            let _ = writeln!(
                out,
                "  {:<22}{:<22}{:<9}{:<11}{:<8}{:<20}{}",
                profile.username,
                profile.display_name,
                status,
                interval,
                format_count(profile.posts_count),
                format_time_ago_or(profile.last_checked_at, now, "Nunca"),
                format_time_ago_or(profile.last_posted_at, now, "Nunca"),
            );
        }

        out
    }
}
