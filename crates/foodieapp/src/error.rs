use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoodieError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Recipe context is still loading; call load() before using it")]
    NotReady,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<confique::Error> for FoodieError {
    fn from(err: confique::Error) -> Self {
        FoodieError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FoodieError>;
