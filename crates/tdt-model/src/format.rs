use serde::{Deserialize, Serialize};

/// Output formatting constants, injected into the rendering code
/// instead of living as globals.
///
/// The default is the only shape the translator produces in
/// production (single tab delimiter, `\n` terminator); alternate
/// values exist for tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFormat {
    delimiter: char,
    terminator: String,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            terminator: "\n".to_string(),
        }
    }
}

impl OutputFormat {
    #[must_use]
    pub fn new(delimiter: char, terminator: impl Into<String>) -> Self {
        Self {
            delimiter,
            terminator: terminator.into(),
        }
    }

    #[must_use]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    #[must_use]
    pub fn terminator(&self) -> &str {
        &self.terminator
    }

    /// Render one output line: fields joined by the delimiter, no
    /// trailing delimiter, exactly one terminator.
    #[must_use]
    pub fn render_line(&self, fields: &[String]) -> String {
        let mut line = String::new();
        for (position, field) in fields.iter().enumerate() {
            if position > 0 {
                line.push(self.delimiter);
            }
            line.push_str(field);
        }
        line.push_str(&self.terminator);
        line
    }
}
