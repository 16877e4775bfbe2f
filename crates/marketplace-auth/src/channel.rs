//! Token transports.
//!
//! Each actor class is bound to exactly one channel. A credential that
//! arrives on the other channel does not exist as far as the gate is
//! concerned.

use std::fmt;

/// Name of the cookie that carries end-user tokens.
pub const TOKEN_COOKIE: &str = "token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Raw `Authorization` header value. Administrative and seller actors.
    Header,
    /// The `token` cookie. End users.
    Cookie,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Header => "header",
            Channel::Cookie => "cookie",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_display() {
        assert_eq!(Channel::Header.to_string(), "header");
        assert_eq!(Channel::Cookie.to_string(), "cookie");
    }

    #[test]
    fn test_cookie_name() {
        assert_eq!(TOKEN_COOKIE, "token");
    }
}
