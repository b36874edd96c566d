use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no window")]
    MissingWindow,

    #[error("no document")]
    MissingDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("dom error: {0}")]
    Dom(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("action only allowed while guessing")]
    NotGuessing,

    #[error("game not started")]
    NotStarted,
}

pub type Result<T> = std::result::Result<T, GameError>;

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
