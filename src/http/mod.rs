pub mod headers;
pub mod parser;

pub use headers::Headers;

/// Well-known header names.
///
/// Names are spelled the way they are conventionally written on the wire.
/// [`Headers`] compares names byte for byte, so `"set-cookie"` and
/// [`HeaderName::SetCookie`] are different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderName {
    Accept,
    ContentLength,
    ContentType,
    Host,
    SetCookie,
}

impl HeaderName {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderName::Accept => "Accept",
            HeaderName::ContentLength => "Content-Length",
            HeaderName::ContentType => "Content-Type",
            HeaderName::Host => "Host",
            HeaderName::SetCookie => "Set-Cookie",
        }
    }
}

impl AsRef<str> for HeaderName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
