//! # Application Controller
//!
//! Connects input lines to the view model and re-renders whenever the
//! character list changes. Input and output are injected so the loop can be
//! driven from tests without a terminal.

use crate::config::Settings;
use crate::repository::CharacterRepository;
use crate::view_models::{CharacterViewModel, LoadState};
use crate::views::ListRenderer;
use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Time allowed for the last search to land after input ends
const SETTLE_TIME: Duration = Duration::from_secs(5);

/// Orchestrates the view model and the renderer
pub struct AppController<W: Write> {
    view_model: CharacterViewModel,
    repository: Arc<dyn CharacterRepository>,
    renderer: ListRenderer<W>,
    settle_timeout: Duration,
}

impl<W: Write> AppController<W> {
    /// Must be called from within a tokio runtime
    pub fn new(
        repository: Arc<dyn CharacterRepository>,
        settings: &Settings,
        writer: W,
        verbose: bool,
    ) -> Self {
        let view_model =
            CharacterViewModel::with_debounce(Arc::clone(&repository), settings.debounce);
        Self {
            view_model,
            repository,
            renderer: ListRenderer::new(writer).with_verbose(verbose),
            settle_timeout: settings.debounce + SETTLE_TIME,
        }
    }

    pub fn view_model(&self) -> &CharacterViewModel {
        &self.view_model
    }

    /// Search once, render the result, and report failures as errors
    pub async fn run_once(&mut self, query: &str) -> Result<()> {
        tracing::debug!("Running single search for '{}'", query);
        let characters = self
            .repository
            .search_by_name(query)
            .await
            .with_context(|| format!("search for '{query}' failed"))?;

        self.renderer
            .render(query, &LoadState::Finished, &characters)
            .context("failed to render results")?;
        Ok(())
    }

    /// Fetch everything, then treat each input line as the new search text
    /// until the input ends
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.view_model.fetch_all().await;
        self.render()?;

        let mut characters = self.view_model.subscribe_characters();
        let mut lines = input.lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line.context("failed to read input")? {
                        Some(text) => {
                            let text = text.trim_end().to_string();
                            tracing::debug!("Input line: '{}'", text);
                            self.view_model.push_search_text(text);
                        }
                        None => break,
                    }
                }
                changed = characters.changed() => {
                    if changed.is_err() {
                        return Ok(());
                    }
                    self.render()?;
                }
            }
        }

        tracing::debug!("Input closed, waiting for the last search");
        let settled =
            tokio::time::timeout(self.settle_timeout, self.view_model.wait_until_settled()).await;
        if settled.is_err() {
            tracing::warn!(
                "Search for '{}' did not finish in time",
                self.view_model.search_query()
            );
        }
        if characters.has_changed().unwrap_or(false) {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.renderer
            .render_view_model(&self.view_model)
            .context("failed to render character list")
    }

    /// Give back the output writer
    pub fn into_writer(self) -> W {
        self.renderer.into_inner()
    }
}
