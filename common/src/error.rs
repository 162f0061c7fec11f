use std::borrow::Cow;
use std::fmt::Display;
use utoipa::ToSchema;

/// A single error, rendered as `{"error": "..."}` when there is no further message.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct ErrorInformation {
    /// A machine-readable error type
    #[schema(value_type = String)]
    pub error: Cow<'static, str>,
    /// A human-readable error message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl ErrorInformation {
    pub fn new(error: impl Into<Cow<'static, str>>, message: impl Display) -> Self {
        Self {
            error: error.into(),
            message: message.to_string(),
        }
    }

    /// Create an error which only carries its type.
    pub fn bare(error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(error, "")
    }
}

/// A list of problems with the request, rendered as `{"errors": [...]}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
}

impl<I, S> From<I> for ValidationErrors
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from(value: I) -> Self {
        Self {
            errors: value.into_iter().map(Into::into).collect(),
        }
    }
}
