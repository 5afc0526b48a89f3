//! Error types for page rendering

use thiserror::Error;

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while rendering a page
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template source failed to parse
    #[error("invalid template syntax: {message}")]
    SyntaxError { message: String },

    /// Template referenced something the context does not provide
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },

    /// Any other failure while rendering
    #[error("failed to render template: {message}")]
    RenderError { message: String },

    /// Requested template is not registered
    #[error("template not found: {name}")]
    NotFound { name: String },
}

impl From<minijinja::Error> for TemplateError {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::SyntaxError => TemplateError::SyntaxError {
                message: err.to_string(),
            },
            minijinja::ErrorKind::UndefinedError => TemplateError::UndefinedVariable {
                name: err.to_string(),
            },
            minijinja::ErrorKind::TemplateNotFound => TemplateError::NotFound {
                name: err.to_string(),
            },
            _ => TemplateError::RenderError {
                message: err.to_string(),
            },
        }
    }
}
