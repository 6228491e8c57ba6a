use super::json_error_response;
use anyhow::anyhow;
use poidb_application::error::{AppError, BError};
pub use poidb_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        let err = match err {
            JsonError::Io(err) => anyhow!(err),
            JsonError::Parse(_body, err) => anyhow!(err),
        };
        Self::OtherWithStatus(err, Status::UnprocessableEntity)
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<UsecaseError> for Error {
    fn from(err: UsecaseError) -> Self {
        AppError::from(err).into()
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(AppError::Business(BError::Repo(err @ RepoError::NotFound))) => {
                json_error_response(req, &err, Status::NotFound)
            }
            Error::App(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
