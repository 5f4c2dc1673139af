use std::fmt::Write as _;

use autoreel_client::{AutoreelClient, ClientError};
use autoreel_core::{format_time_ago, LogList};
use chrono::{DateTime, Utc};

use super::Page;

pub struct LogsPage {
    /// Stored level form (`INFO`, `WARNING`, ...), or `None` for all.
    pub level: Option<String>,
    pub limit: u32,
}

impl Page for LogsPage {
    type Data = LogList;

    const COMMAND: &'static str = "logs";
    const LOADING: &'static str = "Carregando logs...";

    async fn fetch(&self, client: &AutoreelClient) -> Result<LogList, ClientError> {
        client.list_logs(self.level.as_deref(), self.limit).await
    }

    fn render_ready(&self, data: &LogList, now: DateTime<Utc>) -> String {
        let mut out = String::from("Logs do sistema\n");
        if let Some(level) = &self.level {
            let _ = writeln!(out, "  Nível: {level}");
        }
        out.push('\n');

        if data.logs.is_empty() {
            out.push_str("  Nenhum log encontrado\n");
            return out;
        }

        let _ = writeln!(out, "  {:<9}{:<16}MENSAGEM", "NÍVEL", "QUANDO");
        for log in &data.logs {
            let _ = writeln!(
                out,
                "  {:<9}{:<16}{}",
                log.level,
                format_time_ago(log.created_at, now),
                log.message
            );
        }
        out
    }
}
