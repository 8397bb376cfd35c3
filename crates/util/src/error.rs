use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A key listed as required is not an own key of the object.
    #[error("Missing required key: {0}")]
    MissingKey(String),

    /// The object carries an own key outside the allow-list.
    #[error("Unknown key: {0}")]
    UnexpectedKey(String),

    #[error("Invalid percent-encoded UTF-8: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
