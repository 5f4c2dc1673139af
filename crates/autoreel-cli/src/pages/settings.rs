//! Effective client settings. Nothing here is fetched.

use std::fmt::Write as _;

use autoreel_core::AppConfig;

#[must_use]
pub fn render(config: &AppConfig) -> String {
    let mut out = String::new();
    out.push_str("Configurações do Sistema\n");
    out.push_str("Valores efetivos lidos do ambiente (.env)\n\n");

    let token = if config.api_token.is_some() {
        "configurado"
    } else {
        "não configurado"
    };
    let database = if config.database_url.is_some() {
        "configurado"
    } else {
        "não configurado"
    };

    let rows = [
        ("Ambiente", config.env.to_string()),
        ("URL da API", config.api_url.clone()),
        ("Token da API", token.to_string()),
        (
            "Timeout de requisição",
            format!("{} s", config.request_timeout_secs),
        ),
        ("Nível de log", config.log_level.clone()),
        ("Banco de dados", database.to_string()),
        (
            "Retenção de logs",
            format!("{} dias", config.log_retention_days),
        ),
        ("Arquivo de seed", config.seed_path.display().to_string()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<24}{value}");
    }
    out
}
