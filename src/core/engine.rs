use crate::config::Settings;
use crate::core::lookup::{group_by_prefix, sort_terms, top_matches};
use crate::core::report::{render_groups, render_matches};
use crate::domain::ports::TermSource;
use crate::utils::error::Result;

/// Load, sort, then either complete a query or list prefix groups.
pub struct CompletionEngine<S: TermSource> {
    source: S,
    settings: Settings,
}

impl<S: TermSource> CompletionEngine<S> {
    pub fn new(source: S, settings: Settings) -> Self {
        Self { source, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the rendered report.
    pub fn run(&self) -> Result<String> {
        let order = self.settings.order;

        let mut terms = self.source.load()?;
        sort_terms(&mut terms, order);

        match &self.settings.query {
            Some(query) => {
                tracing::info!("🔍 Completing '{}' (limit {})", query, self.settings.limit);
                let matches = top_matches(&terms, query, self.settings.limit);
                tracing::info!("Found {} matches", matches.len());
                render_matches(&matches, self.settings.format)
            }
            None => {
                let groups = group_by_prefix(&terms, order);
                tracing::info!(
                    "Grouped {} terms into {} prefixes of length {}",
                    terms.len(),
                    groups.len(),
                    order.prefix_length()
                );
                render_groups(&groups, self.settings.format)
            }
        }
    }
}
