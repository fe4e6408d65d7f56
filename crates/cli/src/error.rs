use std::io;

use thiserror::Error;

use crate::core::IdParseError;
use crate::core::events::room::encrypted::CodecError;
use crate::core::state::StateError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("public: `{0}`")]
    Public(String),
    #[error("io: `{0}`")]
    Io(#[from] io::Error),
    #[error("serde json: `{0}`")]
    SerdeJson(#[from] serde_json::Error),
    #[error("codec: `{0}`")]
    Codec(#[from] CodecError),
    #[error("state: `{0}`")]
    State(#[from] StateError),
    #[error("ID parse error: `{0}`")]
    IdParse(#[from] IdParseError),
    #[error("config: `{0}`")]
    Config(#[from] figment::Error),
}

impl AppError {
    pub fn public<S: Into<String>>(msg: S) -> Self {
        Self::Public(msg.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
