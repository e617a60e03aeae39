use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LiteralError {
    #[error("Type not handled for: {value} Type: {type_name}")]
    UnsupportedType { value: String, type_name: &'static str },
}
