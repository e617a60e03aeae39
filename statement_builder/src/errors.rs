use thiserror::Error;
use type_mapping::LiteralError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuilderError {
    #[error("Literal error: {0}")]
    Literal(#[from] LiteralError),
}
