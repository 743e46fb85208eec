//! Reads course catalogs from whitespace-delimited text.
//!
//! Each non-blank line holds one course:
//!
//! ```text
//! <number> [<title words>...] [<prerequisite codes>...]
//! ```
//!
//! There is no delimiter between the title and the prerequisites. The first
//! course-code-like token (see [`Config::is_course_code`]) after the first
//! title word starts the prerequisite list. The token directly after the
//! number is always part of the title, even if it looks like a course code.
//! A title word that looks like a course code anywhere later on the line is
//! read as a prerequisite.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use non_empty_string::NonEmptyString;
use tracing::instrument;

use crate::{Catalog, Config, Course};

/// Errors that can occur when loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("could not open file \"{}\"", .path.display())]
    Unavailable {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The source was readable but held no course lines.
    #[error("no valid course data found")]
    Empty,
}

/// Loads a catalog from the file at `path`.
///
/// The file is read to the end and closed before this returns.
///
/// # Errors
///
/// Returns [`LoadError::Unavailable`] if the file cannot be opened or read,
/// and [`LoadError::Empty`] if it contains no course lines.
#[instrument(level = "debug", skip(config))]
pub fn load(path: &Path, config: &Config) -> Result<Catalog, LoadError> {
    let unavailable = |source| LoadError::Unavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let mut reader = BufReader::new(file);

    read(&mut reader, config).map_err(|error| {
        if let LoadError::Unavailable { source, .. } = error {
            unavailable(source)
        } else {
            error
        }
    })
}

/// Reads a catalog from any buffered reader.
///
/// Lines are decoded lossily, so stray non-UTF-8 bytes end up in titles
/// rather than failing the load.
///
/// # Errors
///
/// Returns [`LoadError::Unavailable`] (with an empty path) if reading fails
/// part-way, and [`LoadError::Empty`] if no course lines were found.
pub fn read<R: BufRead>(reader: &mut R, config: &Config) -> Result<Catalog, LoadError> {
    let mut catalog = Catalog::new();
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        let bytes = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LoadError::Unavailable {
                path: PathBuf::new(),
                source,
            })?;
        if bytes == 0 {
            break;
        }
        line_number += 1;

        let line = String::from_utf8_lossy(&buf);
        let Some(course) = parse_line(&line, config) else {
            tracing::debug!(line_number, "skipping blank line");
            continue;
        };
        tracing::trace!(line_number, number = course.number(), "parsed course");
        catalog.push(course);
    }

    if catalog.is_empty() {
        return Err(LoadError::Empty);
    }

    tracing::debug!(courses = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parses one catalog line into a course.
///
/// Returns `None` if the line contains no tokens.
///
/// ```
/// # use courses::{Config, storage::parse_line};
/// let course = parse_line(
///     "CSCI100 Introduction to Computer Science CSCI101",
///     &Config::default(),
/// )
/// .unwrap();
///
/// assert_eq!(course.number(), "CSCI100");
/// assert_eq!(course.title(), "Introduction to Computer Science");
/// assert_eq!(course.prerequisites(), &["CSCI101".to_string()]);
/// ```
#[must_use]
pub fn parse_line(line: &str, config: &Config) -> Option<Course> {
    let mut tokens = line.split_whitespace();
    let number = NonEmptyString::new(tokens.next()?.to_string()).ok()?;

    let mut title = Vec::new();
    let mut prerequisites = Vec::new();

    for token in tokens {
        let in_prerequisites = !prerequisites.is_empty();
        if in_prerequisites || (!title.is_empty() && config.is_course_code(token)) {
            prerequisites.push(token.to_string());
        } else {
            title.push(token);
        }
    }

    Some(Course::new(number, title.join(" "), prerequisites))
}
