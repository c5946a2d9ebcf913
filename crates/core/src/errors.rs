use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Unable to connect to the booking system. Please check your internet connection.")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("{0}")]
    Api(String),

    #[error("Invalid response from the booking system: {0}")]
    InvalidResponse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid wizard transition: {0}")]
    InvalidTransition(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
