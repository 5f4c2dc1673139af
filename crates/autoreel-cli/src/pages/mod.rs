//! Page containers.
//!
//! Each page renders its loading line, issues every request it needs
//! concurrently, and then renders either the populated view or a blocking
//! error panel. There is no partial render: one failed request fails the
//! page.

pub mod analytics;
pub mod dashboard;
pub mod home;
pub mod logs;
pub mod profiles;
pub mod reels;
pub mod settings;

use std::io::Write;

use autoreel_client::{AutoreelClient, ClientError};
use chrono::{DateTime, Utc};

pub use analytics::AnalyticsPage;
pub use dashboard::DashboardPage;
pub use logs::LogsPage;
pub use profiles::ProfilesPage;
pub use reels::ReelsPage;

#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    Failed(PageError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// The API answered with a non-2xx status.
    Api { status: u16, message: String },
    /// Transport failures, malformed bodies and anything else.
    Unexpected(String),
}

impl From<ClientError> for PageError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status {
                status, message, ..
            } => PageError::Api { status, message },
            other => PageError::Unexpected(other.to_string()),
        }
    }
}

impl PageError {
    #[must_use]
    pub fn headline(&self) -> String {
        match self {
            PageError::Api { message, .. } => format!("Erro ao carregar dados: {message}"),
            PageError::Unexpected(_) => "Erro desconhecido ao carregar dados".to_string(),
        }
    }
}

/// A page that loads its data from the API.
pub(crate) trait Page {
    type Data;

    /// Subcommand that re-runs the page, shown in the retry hint.
    const COMMAND: &'static str;
    const LOADING: &'static str;

    async fn fetch(&self, client: &AutoreelClient) -> Result<Self::Data, ClientError>;

    fn render_ready(&self, data: &Self::Data, now: DateTime<Utc>) -> String;
}

pub(crate) async fn load<P: Page>(page: &P, client: &AutoreelClient) -> PageState<P::Data> {
    match page.fetch(client).await {
        Ok(data) => PageState::Ready(data),
        Err(e) => {
            tracing::warn!(page = P::COMMAND, error = %e, "page load failed");
            PageState::Failed(e.into())
        }
    }
}

pub(crate) fn render<P: Page>(page: &P, state: &PageState<P::Data>, now: DateTime<Utc>) -> String {
    match state {
        PageState::Loading => format!("{}\n", P::LOADING),
        PageState::Ready(data) => page.render_ready(data, now),
        PageState::Failed(err) => render_error(err, P::COMMAND),
    }
}

fn render_error(err: &PageError, command: &str) -> String {
    let mut out = format!("{}\n", err.headline());
    if let PageError::Unexpected(detail) = err {
        out.push_str(&format!("  {detail}\n"));
    }
    out.push_str(&format!(
        "Tentar novamente: execute `autoreel-cli {command}` de novo.\n"
    ));
    out
}

/// Writes the loading line, loads the page and writes the outcome.
///
/// `now` anchors relative timestamps in the rendered output.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails; API failures are part of
/// the returned state.
pub(crate) async fn run<P: Page, W: Write>(
    page: &P,
    client: &AutoreelClient,
    out: &mut W,
    now: DateTime<Utc>,
) -> std::io::Result<PageState<P::Data>> {
    write!(out, "{}", render(page, &PageState::Loading, now))?;
    out.flush()?;

    let state = load(page, client).await;
    write!(out, "{}", render(page, &state, now))?;
    out.flush()?;
    Ok(state)
}

/// Left-aligned label/value row used by the stat blocks.
pub(crate) fn stat_line(label: &str, value: &str, note: &str) -> String {
    if note.is_empty() {
        format!("  {label:<22}{value}\n")
    } else {
        format!("  {label:<22}{value:<14}{note}\n")
    }
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
