// Parser and schema error types
// Carries line/column info, source context and suggestions for common mistakes

use std::fmt;

/// Detailed parse error with location and context
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Surrounding context (a few lines around the error)
    pub context: String,
    /// Optional suggestion for fixing the error
    pub suggestion: Option<String>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
            context: String::new(),
            suggestion: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create context from source content
    pub fn with_source_context(mut self, source: &str, context_lines: usize) -> Self {
        let lines: Vec<&str> = source.lines().collect();
        let start = self.line.saturating_sub(context_lines + 1);
        let end = (self.line + context_lines).min(lines.len());

        let mut context = String::new();
        for (i, line) in lines.iter().enumerate().take(end).skip(start) {
            let line_num = i + 1;
            let prefix = if line_num == self.line { ">" } else { " " };
            context.push_str(&format!("{} {:4} | {}\n", prefix, line_num, line));

            if line_num == self.line && self.column > 0 {
                let indicator = " ".repeat(self.column - 1) + "^";
                context.push_str(&format!("       | {}\n", indicator));
            }
        }

        self.context = context;
        self
    }

    /// Create from serde_yaml error
    pub fn from_yaml_error(err: &serde_yaml::Error, source: &str) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));

        let message = format_yaml_error_message(err);
        let suggestion = suggest_yaml_fix(err, source, line);

        let error = ParseError::new(message, line, column).with_source_context(source, 2);
        match suggestion {
            Some(suggestion) => error.with_suggestion(suggestion),
            None => error,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;
        writeln!(f, "  --> line {}:{}", self.line, self.column)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            write!(f, "{}", self.context)?;
        }

        if let Some(suggestion) = &self.suggestion {
            writeln!(f)?;
            writeln!(f, "help: {}", suggestion)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Strip the trailing location that serde_yaml appends, since it is reported separately
fn format_yaml_error_message(err: &serde_yaml::Error) -> String {
    let msg = err.to_string();
    match msg.find(" at line ") {
        Some(idx) => msg[..idx].to_string(),
        None => msg,
    }
}

/// Suggest fixes for common YAML errors
fn suggest_yaml_fix(err: &serde_yaml::Error, source: &str, line: usize) -> Option<String> {
    let msg = err.to_string();
    let lines: Vec<&str> = source.lines().collect();
    let error_line = lines.get(line.saturating_sub(1)).unwrap_or(&"");

    let tab_indented = source.lines().any(|l| l.starts_with('\t'));
    if tab_indented
        && (error_line.starts_with('\t')
            || msg.contains("found character that cannot start any token"))
    {
        return Some(
            "YAML does not allow tabs for indentation. Replace tabs with spaces.".to_string(),
        );
    }

    if msg.contains("mapping values are not allowed in this context") {
        return Some(
            "a value containing ': ' must be quoted, or the line is indented too far".to_string(),
        );
    }

    if msg.contains("did not find expected key") || msg.contains("did not find expected '-'") {
        return Some("check the indentation of this line against its parent".to_string());
    }

    if msg.contains("duplicate entry") {
        return Some("each key may appear only once per mapping".to_string());
    }

    if msg.contains("more than one document") {
        return Some("only a single YAML document is supported; remove the '---' separators".to_string());
    }

    None
}

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Error raised when a located matrix block has the wrong shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub message: String,
    /// Dotted key path to the offending value, e.g. `jobs.test.strategy.matrix.os[1]`
    pub path: String,
    /// Type name of the value that was found instead
    pub found: Option<&'static str>,
    pub suggestion: Option<String>,
}

impl SchemaError {
    pub fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
            found: None,
            suggestion: None,
        }
    }

    pub fn with_found(mut self, found: &'static str) -> Self {
        self.found = Some(found);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema error at '{}': {}", self.path, self.message)?;
        if let Some(found) = self.found {
            write!(f, ", found {}", found)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " ({})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}
