//! Crate Errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A style value names a token the theme does not define
    #[error("unresolved design token `{0}`")]
    UnresolvedToken(String),

    #[error("invalid theme: {0}")]
    InvalidTheme(#[from] serde_json::Error),

    /// Token names must carry the `--` custom-property prefix
    #[error("invalid token name `{0}`")]
    InvalidTokenName(String),
}
