//! Use anyhow errors as valid responses.

use std::fmt;

use rocket::http::Status;
use rocket::request::Request;
use rocket::response;
use rocket::response::Responder;

/// An [`anyhow::Error`] paired with the HTTP status to answer with.
///
/// Anything convertible into `anyhow::Error` converts into this type,
/// so fallible calls inside handlers can use `?` directly. The
/// [`Responder`] impl logs the error and responds with the bare status;
/// the body is whatever Rocket produces for that status by default.
#[derive(Debug)]
pub struct Error {
    pub error: anyhow::Error,
    pub status: Status,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl<E> From<E> for Error
where
    E: Into<anyhow::Error>,
{
    /// Generic errors map to a 500.
    fn from(error: E) -> Self {
        Error {
            error: error.into(),
            status: Status::InternalServerError,
        }
    }
}

impl Error {
    /// Pair a generic error with a specific HTTP status.
    pub fn with_status<E: Into<anyhow::Error>>(error: E, status: Status) -> Self {
        Self {
            error: error.into(),
            status,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error, self.status.code)
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        rocket::error!("request to {} failed: {}", req.uri(), self.error);
        self.status.respond_to(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn generic_errors_become_500s() {
        let err = Error::from(anyhow!("boom"));
        assert_eq!(err.status, Status::InternalServerError);
    }

    #[test]
    fn with_status_keeps_the_given_status() {
        let err = Error::with_status(anyhow!("nope"), Status::NotFound);
        assert_eq!(err.status, Status::NotFound);
        assert_eq!(err.to_string(), "nope (404)");
    }
}
