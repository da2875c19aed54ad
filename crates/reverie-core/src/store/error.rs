use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Entries can only be written for the signed in user")]
    Forbidden,

    #[error("The store did not return the created entry")]
    EmptyResponse,

    #[error(transparent)]
    Service(#[from] reverie_http::Error),

    #[error(transparent)]
    Db(#[from] DbErr),
}
