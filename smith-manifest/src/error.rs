use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "smith.toml");
/// ctx.validation_error("missing required field");
/// ctx.reserved_keyword_error("class", "field", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a reserved keyword error.
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid package error.
    pub fn invalid_package_error(
        &self,
        package: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPackage {
            src: self.named_source(),
            span,
            package: package.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate type error.
    pub fn duplicate_type_error(
        &self,
        qualified_name: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateType {
            src: self.named_source(),
            first_span,
            second_span,
            qualified_name: qualified_name.into(),
        })
    }

    /// Create a duplicate field error.
    pub fn duplicate_field_error(
        &self,
        type_name: impl Into<String>,
        field: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateField {
            src: self.named_source(),
            span,
            type_name: type_name.into(),
            field: field.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'smith init <name>' to create a new project"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse smith.toml")]
    #[diagnostic(code(smith::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate type '{qualified_name}'")]
    #[diagnostic(
        code(smith::duplicate_type),
        help("each [[types]] entry must have a unique package and name")
    )]
    DuplicateType {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        qualified_name: String,
    },

    #[error("duplicate field '{field}' in type '{type_name}'")]
    #[diagnostic(code(smith::duplicate_field))]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared more than once")]
        span: Option<SourceSpan>,
        type_name: String,
        field: String,
    },

    #[error("invalid package '{package}'")]
    #[diagnostic(
        code(smith::invalid_package),
        help("{reason}. Packages are dot-separated Java identifiers, e.g. 'com.acme.model'.")
    )]
    InvalidPackage {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid package")]
        span: Option<SourceSpan>,
        package: String,
        reason: String,
    },

    #[error("{message}")]
    #[diagnostic(code(smith::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Java reserved keyword")]
    #[diagnostic(
        code(smith::reserved_keyword),
        help("rename '{name}' to something else, e.g. '{name}Value'")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(smith::invalid_identifier),
        help(
            "{reason}. Use only letters, digits, '_' and '$', starting with a letter, '_' or '$'."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}
