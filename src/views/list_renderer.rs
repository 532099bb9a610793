//! # List Renderer
//!
//! Plain-text rendering of the character list. Writes to any `Write`
//! implementation so tests can capture the output in a buffer.

use crate::models::Character;
use crate::view_models::{CharacterViewModel, LoadState};
use std::io::{self, Write};

/// Renders the view model's state as text rows
pub struct ListRenderer<W: Write> {
    writer: W,
    verbose: bool,
}

impl<W: Write> ListRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            verbose: false,
        }
    }

    /// Include location details in each row
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Render the current state of a view model
    pub fn render_view_model(&mut self, view_model: &CharacterViewModel) -> io::Result<()> {
        self.render(
            &view_model.search_query(),
            &view_model.load_state(),
            &view_model.characters(),
        )
    }

    /// Render a header followed by one row per character
    pub fn render(
        &mut self,
        query: &str,
        state: &LoadState,
        characters: &[Character],
    ) -> io::Result<()> {
        self.render_header(query, state, characters.len())?;
        for character in characters {
            self.render_row(character)?;
        }
        self.writer.flush()
    }

    fn render_header(&mut self, query: &str, state: &LoadState, count: usize) -> io::Result<()> {
        let noun = if count == 1 { "character" } else { "characters" };
        if query.is_empty() {
            writeln!(self.writer, "-- {count} {noun} [{state}] --")
        } else {
            writeln!(
                self.writer,
                "-- {count} {noun} matching '{query}' [{state}] --"
            )
        }
    }

    fn render_row(&mut self, character: &Character) -> io::Result<()> {
        write!(
            self.writer,
            "#{} {} ({}, {}) from {}",
            character.id,
            character.name,
            character.status,
            character.species,
            character.origin.display_name()
        )?;
        if self.verbose {
            write!(
                self.writer,
                ", last seen at {}, {} episodes, image {}",
                character.location.display_name(),
                character.episode.len(),
                character.image
            )?;
        }
        writeln!(self.writer)
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}
