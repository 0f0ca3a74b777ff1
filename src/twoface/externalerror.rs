use actix_web::http::StatusCode;
use std::fmt;

/// The half of a [`crate::twoface::TfError`] that the user sees: a broad
/// cause plus a short fixed message.
#[derive(Debug)]
pub struct ExternalError {
    pub cause: Cause,
    /// Static text only. Anything request-specific (ids, paths) belongs in
    /// the internal error, where it can't leak.
    pub text: &'static str,
}

/// The blog only fails in two user-visible ways: the requested post doesn't
/// exist, or something broke inside the server.
#[derive(Debug, Clone, Copy)]
pub enum Cause {
    ServerError,
    NotFound,
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        // Same as Debug, i.e. the variant's name.
        write!(f, "{:?}", self)
    }
}

/// Each cause maps to one HTTP status. The mapping lives here rather than in
/// the datastore or handlers, so neither needs to know about status codes.
impl From<Cause> for StatusCode {
    fn from(cause: Cause) -> Self {
        match cause {
            Cause::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Cause::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl fmt::Display for ExternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}: {}", self.cause, self.text)
    }
}

impl Default for ExternalError {
    // The fallback when nobody wrote a better description: a 500 and a
    // deliberately vague message.
    fn default() -> Self {
        Self {
            cause: Cause::ServerError,
            text: "Internal server error",
        }
    }
}
