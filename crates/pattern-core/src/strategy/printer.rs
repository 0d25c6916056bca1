//! Text formatting strategies.
//!
//! The printer returns the formatted text; writing it out is the caller's job.

use super::Slot;
use crate::domain::PatternError;

pub trait PrintFormat {
    fn format(&self, text: &str) -> String;
}

pub struct LowerCase;

impl PrintFormat for LowerCase {
    fn format(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

pub struct UpperCase;

impl PrintFormat for UpperCase {
    fn format(&self, text: &str) -> String {
        text.to_uppercase()
    }
}

/// Lower-cases everything, then upper-cases every even character index.
pub struct AlternatingCase;

impl PrintFormat for AlternatingCase {
    fn format(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .enumerate()
            .fold(String::with_capacity(text.len()), |mut out, (i, c)| {
                if i % 2 == 0 {
                    out.extend(c.to_uppercase());
                } else {
                    out.push(c);
                }
                out
            })
    }
}

pub struct Printer {
    format: Slot<dyn PrintFormat>,
}

impl Printer {
    pub fn new(format: impl PrintFormat + 'static) -> Self {
        Self {
            format: Slot::bound("print_format", Box::new(format)),
        }
    }

    pub fn set_strategy(&mut self, format: impl PrintFormat + 'static) {
        self.format.set_behavior(Box::new(format));
    }

    pub fn render(&self, text: &str) -> Result<String, PatternError> {
        Ok(self.format.require()?.format(text))
    }
}
