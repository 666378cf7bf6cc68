//! Line-oriented INI parser.
//!
//! Grammar, applied to each line after trimming surrounding whitespace:
//! blank lines and lines starting with `;` or `#` are skipped, a line starting
//! with `[` opens a section named by the text up to the last `]`, and any
//! other line is a field split at its first `=`. Keys and values keep any
//! inner whitespace and every `=` after the first.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::BufRead;

use crate::domain::configuration::{Configuration, Field, Section};
use crate::domain::error::{IniError, Result};
use crate::domain::options::{DuplicateSections, OrphanFields, ParseOptions};

const BOM: char = '\u{feff}';

/// One classified source line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Skip,
    Header(&'a str),
    Field { key: &'a str, value: &'a str },
}

fn classify(text: &str, line: usize) -> Result<Line<'_>> {
    let text = text.trim();
    if text.is_empty() || text.starts_with(';') || text.starts_with('#') {
        return Ok(Line::Skip);
    }

    if let Some(rest) = text.strip_prefix('[') {
        return match rest.rfind(']') {
            Some(close) => Ok(Line::Header(&rest[..close])),
            None => Err(IniError::UnterminatedSection {
                line,
                content: text.to_string(),
            }),
        };
    }

    match text.split_once('=') {
        Some((key, value)) => Ok(Line::Field { key, value }),
        None => Err(IniError::MalformedLine {
            line,
            content: text.to_string(),
        }),
    }
}

#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse every line of `reader`. Read errors are returned as [`IniError::Io`].
    ///
    /// Input must be UTF-8. A line that is not valid UTF-8 fails the whole
    /// parse with an [`IniError::Io`] of kind [`std::io::ErrorKind::InvalidData`].
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<Configuration> {
        let mut sections: BTreeMap<String, Section> = BTreeMap::new();
        let mut current: Option<String> = None;

        for (idx, raw) in reader.lines().enumerate() {
            let raw = raw?;
            let line = idx + 1;
            let text = if idx == 0 {
                raw.strip_prefix(BOM).unwrap_or(&raw)
            } else {
                raw.as_str()
            };

            match classify(text, line)? {
                Line::Skip => {
                    tracing::trace!(line, "skipping blank or comment line");
                }
                Line::Header(name) => {
                    self.open_section(&mut sections, name, line)?;
                    current = Some(name.to_string());
                }
                Line::Field { key, value } => {
                    if current.is_none() {
                        match self.options.orphan_fields {
                            OrphanFields::Reject => {
                                return Err(IniError::FieldOutsideSection {
                                    line,
                                    key: key.to_string(),
                                });
                            }
                            OrphanFields::DefaultSection => {
                                tracing::debug!(line, "opening implicit default section");
                                current = Some(String::new());
                            }
                        }
                    }
                    let name = current.clone().unwrap_or_default();
                    let section = sections.entry(name).or_default();
                    if section.insert(Field::new(key, value)).is_some() {
                        tracing::debug!(
                            section = section.name(),
                            key,
                            line,
                            "duplicate key, later value wins"
                        );
                    }
                }
            }
        }

        tracing::debug!(sections = sections.len(), "parsed configuration");
        Ok(Configuration::from_sections(sections))
    }

    pub fn parse_str(&self, input: &str) -> Result<Configuration> {
        self.parse(input.as_bytes())
    }

    fn open_section(
        &self,
        sections: &mut BTreeMap<String, Section>,
        name: &str,
        line: usize,
    ) -> Result<()> {
        match sections.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                tracing::debug!(section = name, line, "registered section");
                slot.insert(Section::new(name));
            }
            Entry::Occupied(mut slot) => match self.options.duplicate_sections {
                DuplicateSections::Reject => {
                    return Err(IniError::DuplicateSection {
                        name: name.to_string(),
                        line,
                    });
                }
                DuplicateSections::Replace => {
                    tracing::debug!(section = name, line, "replacing earlier section definition");
                    slot.insert(Section::new(name));
                }
            },
        }
        Ok(())
    }
}

/// Parse `reader` with the default, strict options.
///
/// Non-UTF-8 input is rejected as an [`IniError::Io`] of kind
/// [`std::io::ErrorKind::InvalidData`].
pub fn parse<R: BufRead>(reader: R) -> Result<Configuration> {
    Parser::default().parse(reader)
}

/// Parse an in-memory INI document with the default, strict options.
pub fn parse_str(input: &str) -> Result<Configuration> {
    Parser::default().parse_str(input)
}
