use thiserror::Error;

/// Errors raised while interpreting a rule tag.
///
/// Every variant is fatal for the parse call that raised it: the parse
/// aborts immediately and any partially built mapping is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleTagError {
    /// The state machine received a character that is not valid for its
    /// current state. The position is the zero-based byte offset of the
    /// character within the original tag string.
    #[error("unexpected {symbol} symbol in position {position}")]
    UnexpectedSymbol { symbol: char, position: usize },
    /// A keyword rule did not match any recognized keyword. The position is
    /// the offset of the character that terminated the token.
    #[error("unexpected token {token} in position {position}")]
    UnexpectedToken { token: String, position: usize },
    /// A country code opened a second rule block within the same tag.
    #[error("country {0} defined twice")]
    DuplicateCountry(String),
}

pub type Result<T> = std::result::Result<T, RuleTagError>;
