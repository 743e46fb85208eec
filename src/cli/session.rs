//! The interactive menu loop.
//!
//! The session owns the loaded catalog for its whole lifetime. Every load
//! replaces the catalog outright; a failed load leaves it empty.

use std::{
    io::{BufRead, Write},
    ops::ControlFlow,
    path::Path,
};

use courses::{Catalog, Config, LoadError, Prerequisite};
use tracing::instrument;

use super::{
    input::Tokens,
    menu::{self, Choice},
    terminal::Palette,
};

const WELCOME: &str = "Welcome to the course planner.";
const FAREWELL: &str = "Thank you for using the course planner!";
const NO_DATA: &str = "No data loaded. Please load data first.";

/// A single planner session over a pair of input and output streams.
pub struct Session<R, W> {
    input: Tokens<R>,
    output: W,
    config: Config,
    catalog: Catalog,
    palette: Palette,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input: Tokens::new(input),
            output,
            config,
            catalog: Catalog::new(),
            palette: Palette::default(),
        }
    }

    #[must_use]
    pub const fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Runs the menu loop until the user exits or the input ends.
    ///
    /// # Errors
    ///
    /// Only failures to read input or write output are returned. Everything
    /// the user types is handled with a message and another prompt.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{WELCOME}")?;

        loop {
            for line in menu::MENU {
                writeln!(self.output, "{line}")?;
            }
            let Some(answer) = self.ask(menu::PROMPT)? else {
                break;
            };

            let flow = match answer.parse::<Choice>() {
                Ok(Choice::Load) => self.load()?,
                Ok(Choice::List) => self.list()?,
                Ok(Choice::Show) => self.show()?,
                Ok(Choice::Exit) => {
                    writeln!(self.output, "{FAREWELL}")?;
                    return Ok(());
                }
                Err(invalid) => {
                    tracing::debug!(%answer, "rejected menu answer");
                    self.input.discard_line();
                    writeln!(self.output, "{}", self.palette.warning(&invalid.to_string()))?;
                    ControlFlow::Continue(())
                }
            };

            if flow.is_break() {
                break;
            }
        }

        tracing::debug!("input closed, leaving session");
        writeln!(self.output)?;
        Ok(())
    }

    /// Prints a prompt and waits for one token of input.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(self.input.next_token()?)
    }

    #[instrument(level = "debug", skip(self))]
    fn load(&mut self) -> anyhow::Result<ControlFlow<()>> {
        let Some(name) = self.ask("Enter the file name containing course data: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        self.catalog = Catalog::new();
        match courses::load(Path::new(&name), &self.config) {
            Ok(catalog) => {
                self.catalog = catalog;
                let message = format!(
                    "Data loaded successfully! {} courses read.",
                    self.catalog.len()
                );
                writeln!(self.output, "{}", self.palette.success(&message))?;
            }
            Err(error @ LoadError::Unavailable { .. }) => {
                tracing::info!(%error, "load failed");
                let message = format!("ERROR: Could not open file \"{name}\"");
                writeln!(self.output, "{}", self.palette.warning(&message))?;
            }
            Err(LoadError::Empty) => {
                tracing::info!(file = %name, "no courses in file");
                let message = "No valid course data found in the file.";
                writeln!(self.output, "{}", self.palette.warning(message))?;
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn list(&mut self) -> anyhow::Result<ControlFlow<()>> {
        if self.catalog.is_empty() {
            writeln!(self.output, "{}", self.palette.warning(NO_DATA))?;
            return Ok(ControlFlow::Continue(()));
        }

        writeln!(self.output, "{}", self.palette.dim("Here is a sample schedule:"))?;
        for course in self.catalog.sorted_by_number() {
            writeln!(self.output, "{course}")?;
        }

        Ok(ControlFlow::Continue(()))
    }

    fn show(&mut self) -> anyhow::Result<ControlFlow<()>> {
        if self.catalog.is_empty() {
            writeln!(self.output, "{}", self.palette.warning(NO_DATA))?;
            return Ok(ControlFlow::Continue(()));
        }

        let Some(code) = self.ask("What course do you want to know about? ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let Some(course) = self.catalog.find_by_number(&code) else {
            let message = format!("{code} is not found.");
            writeln!(self.output, "{}", self.palette.warning(&message))?;
            return Ok(ControlFlow::Continue(()));
        };

        writeln!(self.output, "{course}")?;
        if course.prerequisites().is_empty() {
            writeln!(self.output, "No prerequisites.")?;
            return Ok(ControlFlow::Continue(()));
        }

        writeln!(self.output, "{}", self.palette.dim("Prerequisites:"))?;
        for prerequisite in self.catalog.prerequisites_of(course) {
            match prerequisite {
                Prerequisite::Known(found) => writeln!(self.output, "{found}")?,
                Prerequisite::Missing(missing) => {
                    let message = format!("{missing} (course not found in data)");
                    writeln!(self.output, "{}", self.palette.warning(&message))?;
                }
            }
        }

        Ok(ControlFlow::Continue(()))
    }
}
