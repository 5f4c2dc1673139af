//! Landing screen: product summary and the navigation catalogue.

use std::fmt::Write as _;

use autoreel_core::palette::COMMANDS;

#[must_use]
pub fn render() -> String {
    let mut out = String::new();
    out.push_str("AutoReel\n");
    out.push_str("Automatize seus Reels: do Instagram para o TikTok\n\n");
    out.push_str("  Automatize seus Reels      Monitoramento contínuo dos perfis\n");
    out.push_str("  Analytics Detalhados       Visualizações, curtidas e engajamento\n");
    out.push_str("  Seguro e Confiável         Publicação pela API oficial do TikTok\n");

    out.push_str("\nNavegação\n");
    for command in &COMMANDS {
        let _ = writeln!(
            out,
            "  autoreel-cli {:<11}{:<16}{}",
            command.id, command.title, command.description
        );
    }
    out.push_str("  autoreel-cli open <busca>  abre o primeiro comando encontrado\n");
    out
}
