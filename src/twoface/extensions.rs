//! Adapters that attach a user-facing description to errors from other
//! libraries, so a `tera::Error` or `std::io::Error` can flow out of a
//! handler as a [`TfError`].
use crate::twoface::{ExternalError, TfError};

pub trait Describe {
    /// Pair this error with the description the user should see.
    fn describe(self, external: ExternalError) -> TfError;
}

impl<Internal: Into<anyhow::Error>> Describe for Internal {
    fn describe(self, external: ExternalError) -> TfError {
        TfError {
            internal: self.into(),
            external,
        }
    }
}

/// Errors nobody described get the default external error (a plain 500).
/// `?` in handlers relies on this; anything user-visible should go through
/// `describe` instead.
impl<Internal: Into<anyhow::Error>> From<Internal> for TfError {
    fn from(internal: Internal) -> TfError {
        internal.describe(Default::default())
    }
}

pub trait DescribeErr<T> {
    /// Describe the error inside a `Result`, shorthand for
    /// `.map_err(|e| e.describe(external))`:
    /// ```text
    /// let html = templates.render(name, ctx).describe_err(external)?;
    /// ```
    fn describe_err(self, external: ExternalError) -> Result<T, TfError>;
}

impl<T, E> DescribeErr<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn describe_err(self, external: ExternalError) -> Result<T, TfError> {
        self.map_err(|e| e.describe(external))
    }
}
