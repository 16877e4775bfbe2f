use thiserror::Error;

/// Why a request failed to authenticate.
///
/// `Expired` is kept apart from the other invalid-token kinds: clients react
/// to it with a silent re-login instead of a full logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no credential was presented")]
    MissingCredential,
    #[error("token is malformed")]
    Malformed,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::Expired,
            // A header naming any algorithm other than the pinned one is an
            // attempt to change how the signature is checked.
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                AuthError::InvalidSignature
            }
            _ => AuthError::Malformed,
        }
    }
}

/// Failure to mint a token. Only the developer CLI and tests sign tokens.
#[derive(Debug, Error)]
pub enum SigningError {
    #[error("failed to sign token: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),
    #[error("token expiry is out of range")]
    ExpiryOutOfRange,
}
