use crate::{CoreResult, StemError};

use std::{fs, panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Header row of the YAMNet/AudioSet class map.
const CLASS_MAP_HEADER: &str = "index,mid,display_name";
const DISPLAY_NAME_COLUMN: usize = 2;

/// Ordered class names, index-aligned with the model's score columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    names: Vec<String>,
}

impl Vocabulary {
    /// Reads and parses a class-name file.
    #[track_caller]
    #[instrument]
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let text = fs::read_to_string(path)?;
        let vocabulary = Self::parse(&text)?;

        debug!(path = ?path, classes = vocabulary.len(), "Vocabulary loaded");

        Ok(vocabulary)
    }

    /// Parses either a class-map CSV (`index,mid,display_name`) or a plain
    /// newline-delimited list of names. Blank lines are ignored.
    #[track_caller]
    pub fn parse(text: &str) -> CoreResult<Self> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty()).peekable();

        let is_class_map = lines
            .peek()
            .is_some_and(|first| first.trim().eq_ignore_ascii_case(CLASS_MAP_HEADER));

        let names = if is_class_map {
            lines
                .skip(1)
                .enumerate()
                .map(|(row, line)| parse_class_map_row(row, line))
                .collect::<CoreResult<Vec<_>>>()?
        } else {
            lines.map(|line| line.trim().to_string()).collect()
        };

        if names.is_empty() {
            return Err(StemError::VocabularyError {
                reason: "No class names found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { names })
    }

    /// Wraps an already ordered list of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Class name at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the vocabulary holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates names in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[track_caller]
fn parse_class_map_row(row: usize, line: &str) -> CoreResult<String> {
    let malformed = |reason: String| StemError::VocabularyError {
        reason: format!("Class map row {}: {}", row, reason),
        location: ErrorLocation::from(Location::caller()),
    };

    let fields = split_csv_line(line);

    match fields.first().map(|f| f.trim().parse::<usize>()) {
        Some(Ok(index)) if index == row => {}
        Some(Ok(index)) => return Err(malformed(format!("out of order index {}", index))),
        _ => return Err(malformed(format!("missing index in {:?}", line))),
    }

    fields
        .into_iter()
        .nth(DISPLAY_NAME_COLUMN)
        .map(|name| name.trim().to_string())
        .ok_or_else(|| malformed(format!("missing display name in {:?}", line)))
}

/// Splits one CSV record, honouring double quotes and `""` escapes.
pub(crate) fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}
