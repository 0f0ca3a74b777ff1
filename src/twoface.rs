//! Every error in blogling has two faces: the internal one, carrying whatever
//! detail the failing library produced, and the external one shown to the
//! person at the browser. Handlers return [`Fallible`] and the actix
//! integration takes care of logging the first and rendering the second.

mod extensions;
pub mod externalerror;
mod integrations;

pub use extensions::*;
pub use externalerror::{Cause, ExternalError};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An error split into a private half and a public half. The internal error
/// never reaches a response body, so handlers can carry file paths, template
/// names and raw ids around without leaking them.
#[derive(Debug)]
pub struct TfError {
    /// What actually went wrong, for the logs only.
    pub internal: anyhow::Error,
    /// What the user is told went wrong.
    pub external: ExternalError,
}

// Display shows the external half only. Logging the internal half is the
// actix integration's job.
impl Display for TfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), fmt::Error> {
        write!(f, "{}", self.external)
    }
}

/// What every fallible operation in blogling returns.
pub type Fallible<T> = Result<T, TfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_external_part_is_shown() {
        let io_err = std::fs::read("blogling-config-that-does-not-exist.toml").unwrap_err();
        let err = io_err.describe(ExternalError {
            cause: Cause::ServerError,
            text: "Couldn't read the config file",
        });
        assert_eq!(err.to_string(), "ServerError: Couldn't read the config file");
    }
}
