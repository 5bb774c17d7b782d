//! Pretty-printing facility for error messages
//!
//! Mostly a wrapper around `pest::error::Error::new_from_span`:
//! the difficult part of the formatting is handled by pest, and `Error` only
//! adds aggregation of messages as well as colored output.
//!
//! # Example
//!
//! ```rust
//! Error::new("Invalid range")
//!     .with_span(&start_loc, "period starts here")
//!     .with_span(&end_loc, "but ends here")
//!     .with_text(format!("{} comes after {}", start, end))
//!     .with_hint("swap the two months")
//!     .register(errs);
//! ```
//!
//! ```txt
//! --> Error: Invalid range
//!  |     --> --start:1:1
//!  |      |
//!  |    1 | 2024-12
//!  |      | ^-----^
//!  |      |
//!  |      = period starts here
//!  |     --> --end:1:1
//!  |      |
//!  |    1 | 2023-01
//!  |      | ^-----^
//!  |      |
//!  |      = but ends here
//!  |  2024-12 comes after 2023-01
//!  |      ? hint: did you mean 2023-01..2024-12 ?
//! ```

use std::fmt;

use crate::load::parse::Rule;

/// Location of an error
///
/// Contains the name of the argument in which the error
/// occured and the precise span within its text
pub type Loc<'i> = (&'i str, pest::Span<'i>);

/// Report for a single error
///
/// All messages (`label` passed with `new`, arguments of `with_hint`
/// and `with_text`) should fit in a single line.
#[must_use]
#[derive(Debug)]
pub struct Error {
    /// determines the error label (warning/error) and the color (yellow/red)
    fatal: bool,
    /// name of the error
    label: String,
    /// contents of the error
    items: Vec<Item>,
}

/// Kinds of items that can be added to an error report
#[derive(Debug)]
enum Item {
    /// code block
    Block(pest::error::Error<Rule>),
    /// important message
    Text(String),
    /// recommendations for fixes
    Hint(String),
}

/// A collection of errors
///
/// Typically to keep record of all errors detected in the arguments
/// of one run
#[must_use]
#[derive(Debug, Default)]
pub struct Record {
    /// how many are errors, the rest are warnings
    fatal: usize,
    contents: Vec<Error>,
}

impl Error {
    /// Create a new error
    pub fn new<S>(msg: S) -> Self
    where
        S: ToString,
    {
        Self {
            fatal: true,
            label: msg.to_string(),
            items: Vec::new(),
        }
    }

    /// Mark as a warning rather that a fatal error
    pub fn nonfatal(mut self) -> Self {
        self.fatal = false;
        self
    }

    /// Add a pre-existing error (e.g. to build from a parsing error)
    pub fn with_error(mut self, err: pest::error::Error<Rule>) -> Self {
        self.items.push(Item::Block(err.renamed_rules(rule_rename)));
        self
    }

    /// Add a code block and its associated message
    pub fn with_span<S>(mut self, loc: &Loc, msg: S) -> Self
    where
        S: ToString,
    {
        self.items.push(Item::Block(
            pest::error::Error::new_from_span(
                pest::error::ErrorVariant::CustomError {
                    message: msg.to_string(),
                },
                loc.1.clone(),
            )
            .with_path(loc.0),
        ));
        self
    }

    /// Add an important note
    pub fn with_text<S>(mut self, msg: S) -> Self
    where
        S: ToString,
    {
        self.items.push(Item::Text(msg.to_string()));
        self
    }

    /// Add a hint on how to fix
    pub fn with_hint<S>(mut self, msg: S) -> Self
    where
        S: ToString,
    {
        self.items.push(Item::Hint(msg.to_string()));
        self
    }

    /// Consume the error and add it to the pool of recorded errors
    pub fn register(self, record: &mut Record) {
        record.register(self);
    }
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if any of the recorded errors are fatal
    pub fn is_fatal(&self) -> bool {
        self.fatal > 0
    }

    /// Number of fatal errors
    pub fn count_errors(&self) -> usize {
        self.fatal
    }

    /// Number of nonfatal errors
    pub fn count_warnings(&self) -> usize {
        self.contents.len() - self.fatal
    }

    /// Add a new error to the pool
    fn register(&mut self, err: Error) {
        if err.fatal {
            self.fatal += 1;
            tracing::debug!(label = %err.label, "fatal error registered");
        } else {
            tracing::debug!(label = %err.label, "warning registered");
        }
        self.contents.push(err);
    }
}

const RED: &str = "\x1b[0;91;1m";
const YELLOW: &str = "\x1b[0;93;1m";
const BLUE: &str = "\x1b[0;96;1m";
const WHITE: &str = "\x1b[0;1m";
const NONE: &str = "\x1b[0m";

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (color, header) = if self.fatal {
            (RED, "--> Error")
        } else {
            (YELLOW, "--> Warning")
        };
        writeln!(f, "{}{}:{} {}{}", color, header, WHITE, self.label, NONE)?;
        for item in &self.items {
            match item {
                Item::Block(err) => {
                    let mut align = "   ".to_string();
                    let mut align_found = false;
                    for line in format!("{}", err).split('\n') {
                        write!(f, " {}|{}  {}", color, if align_found { &align } else { "" }, BLUE)?;
                        for c in line.chars() {
                            match c {
                                '-' if !align_found => {
                                    align_found = true;
                                    write!(f, "{}-", align)?;
                                }
                                ' ' if !align_found => {
                                    align.pop();
                                    write!(f, " ")?;
                                }
                                '|' => write!(f, "|{}", NONE)?,
                                '=' => write!(f, "={}", NONE)?,
                                '^' => write!(f, "{}^", color)?,
                                _ => write!(f, "{}", c)?,
                            }
                        }
                        writeln!(f)?;
                    }
                }
                Item::Text(txt) => {
                    writeln!(f, " {}|  {}{}{}", color, WHITE, txt, NONE)?;
                }
                Item::Hint(txt) => {
                    writeln!(f, " {}|      {}? hint: {}{}", color, BLUE, NONE, txt)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contents.is_empty() {
            return Ok(());
        }
        let fatal = self.is_fatal();
        let count = if fatal { self.count_errors() } else { self.count_warnings() };
        let color = if fatal { RED } else { YELLOW };
        // only print errors with the maximum fatality
        for err in self.contents.iter().filter(|err| err.fatal == fatal) {
            writeln!(f, "{}", err)?;
        }
        let plural = if count > 1 { "s" } else { "" };
        if fatal {
            writeln!(f, "{}Fatal: {}{} error{} emitted{}", color, WHITE, count, plural, NONE)?;
        } else {
            writeln!(f, "{}Nonfatal: {}{} warning{} emitted{}", color, WHITE, count, plural, NONE)?;
        }
        Ok(())
    }
}

/// Convert rule names to user-friendly information about their purpose
fn rule_rename(rule: &Rule) -> String {
    use Rule::*;
    String::from(match rule {
        EOI => "end of input",
        digit => "a digit (0..9)",
        year => "a year ('YYYY')",
        month => "a month ('01' ..= '12')",
        year_month => "a month of a year ('YYYY-MM')",
        date => "a date ('YYYY-MM')",
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts() {
        let mut errs = Record::new();
        assert!(!errs.is_fatal());
        assert_eq!(errs.to_string(), "");
        Error::new("No rate data").nonfatal().with_text("nothing").register(&mut errs);
        assert!(!errs.is_fatal());
        assert_eq!(errs.count_warnings(), 1);
        assert!(errs.to_string().contains("Nonfatal"));
        Error::new("Invalid amount").with_hint("write it as XXX.XX").register(&mut errs);
        assert!(errs.is_fatal());
        assert_eq!(errs.count_errors(), 1);
        assert_eq!(errs.count_warnings(), 1);
        let shown = errs.to_string();
        assert!(shown.contains("Invalid amount"));
        assert!(shown.contains("write it as XXX.XX"));
        // warnings are hidden when errors exist
        assert!(!shown.contains("No rate data"));
    }
}
