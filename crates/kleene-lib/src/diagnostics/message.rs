use super::Span;

/// Regex syntax error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Unbalanced delimiters
    UnclosedGroup,
    UnmatchedParen,

    // User omitted something required
    EmptyExpression,
    ExpectedExpression,
    MissingOperator,

    // User wrote something that doesn't belong
    EmptyGroup,
    MisplacedOperator,
    RepeatedStar,
    UnexpectedToken,
}

impl DiagnosticKind {
    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedGroup => "missing closing `)`",
            Self::UnmatchedParen => "unmatched `)`",

            Self::EmptyExpression => "empty expression",
            Self::ExpectedExpression => "expected an expression",
            Self::MissingOperator => "expected `.` or `+` between operands",

            Self::EmptyGroup => "empty `()` is not allowed",
            Self::MisplacedOperator => "operator is missing an operand",
            Self::RepeatedStar => "`*` cannot be applied twice",
            Self::UnexpectedToken => "unexpected token",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::MisplacedOperator => "operator `{}` is missing an operand".to_string(),
            Self::UnexpectedToken => "unexpected `{}`".to_string(),

            Self::UnclosedGroup => format!("{}; {{}}", self.fallback_message()),

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RelatedInfo {
    pub(crate) span: Span,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub(crate) fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) span: Span,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, span: Span) -> Self {
        Self::new(kind, span, kind.fallback_message())
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error at {}: {}", self.span, self.message)?;
        for related in &self.related {
            write!(f, " ({} at {})", related.message, related.span)?;
        }
        Ok(())
    }
}
