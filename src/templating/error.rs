//! Structured errors for rendering templates that call helpers.
//!
//! Tera reports failures as a chain of messages. [`TemplateError`] keeps the
//! parts a template author needs: which helper failed, the helper's own
//! message, the expected call form and, for parse errors, the line.

/// How a helper was called from the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// `{{ Left(s=name, n=3) }}`
    Function,
    /// `{{ name | Left(n=3) }}`
    Filter,
}

impl std::fmt::Display for CallKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallKind::Function => write!(f, "function"),
            CallKind::Filter => write!(f, "filter"),
        }
    }
}

/// Errors raised while rendering a template.
#[derive(Debug)]
pub enum TemplateError {
    /// A helper was called and returned an error.
    HelperFailed {
        /// Name as written in the template, including any prefix
        helper: String,
        call: CallKind,
        /// The helper's own error message
        message: String,
        /// Call form, e.g. `Mid(s, left[, right])`, when the helper is known
        usage: Option<String>,
    },

    /// The template called a function or filter that is not registered.
    UnknownHelper {
        name: String,
        call: CallKind,
        suggestions: Vec<String>,
    },

    /// Any other parse or render failure.
    SyntaxError {
        message: String,
        line: Option<usize>,
    },
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::HelperFailed {
                helper,
                call,
                message,
                ..
            } => {
                write!(f, "Template {} '{}' failed: {}", call, helper, message)
            }
            TemplateError::UnknownHelper {
                name,
                call,
                ..
            } => {
                write!(f, "Template {} not found: '{}'", call, name)
            }
            TemplateError::SyntaxError {
                message,
                ..
            } => {
                write!(f, "Template syntax error: {}", message)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

impl TemplateError {
    /// Name of the helper involved, if any.
    pub fn helper(&self) -> Option<&str> {
        match self {
            TemplateError::HelperFailed {
                helper,
                ..
            } => Some(helper),
            TemplateError::UnknownHelper {
                name,
                ..
            } => Some(name),
            TemplateError::SyntaxError {
                ..
            } => None,
        }
    }

    /// Generate a multi-line message with context and suggestions.
    pub fn format_with_context(&self) -> String {
        match self {
            TemplateError::HelperFailed {
                helper,
                call,
                message,
                usage,
            } => format_helper_failed(helper, *call, message, usage.as_deref()),
            TemplateError::UnknownHelper {
                name,
                call,
                suggestions,
            } => format_unknown_helper(name, *call, suggestions),
            TemplateError::SyntaxError {
                message,
                line,
            } => format_syntax_error(message, *line),
        }
    }
}

fn format_helper_failed(helper: &str, call: CallKind, message: &str, usage: Option<&str>) -> String {
    let mut msg = String::new();

    msg.push_str("ERROR: Template Helper Failed\n\n");
    msg.push_str(&format!("Helper: {} ({})\n", helper, call));
    msg.push_str(&format!("Error: {}\n\n", message));

    if let Some(usage) = usage {
        msg.push_str(&format!("SUGGESTION: Check the arguments passed to '{}'.\n", helper));
        msg.push_str(&format!("Expected: {}\n", usage));
        if call == CallKind::Filter {
            msg.push_str("The piped value is passed as the first argument.\n");
        }
        msg.push('\n');
    }

    msg
}

fn format_unknown_helper(name: &str, call: CallKind, suggestions: &[String]) -> String {
    let mut msg = String::new();

    msg.push_str(&format!("ERROR: Unknown Template {}\n\n", capitalize(call)));
    msg.push_str(&format!("Name: {}\n\n", name));

    if !suggestions.is_empty() {
        msg.push_str("Did you mean one of these?\n");
        for suggestion in suggestions {
            msg.push_str(&format!("  - {}\n", suggestion));
        }
        msg.push('\n');
    }

    msg.push_str("SUGGESTION: Helper names are case-sensitive. Check that the helper is not\n");
    msg.push_str("disabled in the [helpers] configuration and that the prefix matches.\n\n");

    msg
}

fn format_syntax_error(message: &str, line: Option<usize>) -> String {
    let mut msg = String::new();

    msg.push_str("ERROR: Template Syntax Error\n\n");
    msg.push_str(&format!("Error: {}\n", message));

    if let Some(line) = line {
        msg.push_str(&format!("Line: {}\n", line));
    }

    msg.push_str("\nSUGGESTION: Check template syntax for unclosed tags or invalid expressions.\n");
    msg.push_str("Common issues:\n");
    msg.push_str("  - Unclosed {{ }} or {% %} delimiters\n");
    msg.push_str("  - Positional arguments (helpers take keyword arguments)\n");
    msg.push_str("  - Missing quotes around string values\n\n");

    msg
}

fn capitalize(call: CallKind) -> &'static str {
    match call {
        CallKind::Function => "Function",
        CallKind::Filter => "Filter",
    }
}
