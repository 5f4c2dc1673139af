//! Command palette: a fixed catalogue of navigation targets with
//! case-insensitive search and a wrapping selection cursor.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteCommand {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub static COMMANDS: [PaletteCommand; 6] = [
    PaletteCommand {
        id: "dashboard",
        title: "Dashboard",
        description: "Visão geral do sistema",
        category: "Navegação",
    },
    PaletteCommand {
        id: "profiles",
        title: "Perfis",
        description: "Gerenciar perfis do Instagram",
        category: "Navegação",
    },
    PaletteCommand {
        id: "reels",
        title: "Reels",
        description: "Ver reels postados",
        category: "Navegação",
    },
    PaletteCommand {
        id: "analytics",
        title: "Analytics",
        description: "Estatísticas e métricas",
        category: "Navegação",
    },
    PaletteCommand {
        id: "logs",
        title: "Logs",
        description: "Logs do sistema",
        category: "Navegação",
    },
    PaletteCommand {
        id: "settings",
        title: "Configurações",
        description: "Configurações do sistema",
        category: "Navegação",
    },
];

impl PaletteCommand {
    fn matches(&self, needle: &str) -> bool {
        [self.title, self.description, self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Search query plus selected index over the filtered commands.
#[derive(Debug, Clone, Default)]
pub struct CommandPalette {
    query: String,
    selected: usize,
}

impl CommandPalette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the query and resets the selection to the first match.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
        self.selected = 0;
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Commands matching the current query, in catalogue order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&'static PaletteCommand> {
        COMMANDS
            .iter()
            .filter(|c| self.query.is_empty() || c.matches(&self.query))
            .collect()
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn next(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn previous(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static PaletteCommand> {
        self.filtered().get(self.selected).copied()
    }
}
