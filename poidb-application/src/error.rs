use poidb_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use thiserror::Error;

pub use poidb_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<UsecaseError> for AppError {
    fn from(err: UsecaseError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<UsecaseError> for BError {
    fn from(err: UsecaseError) -> Self {
        match err {
            UsecaseError::Repo(err) => Self::Repo(err),
        }
    }
}
