//! Callback field extraction.
//!
//! A beacon callback is a plain GET (any method is accepted) against `/`
//! carrying two optional query parameters. Missing keys become empty
//! strings; nothing about the payload is validated.

/// Fields extracted from a callback's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackFields {
    /// Reported machine hostname.
    pub hostname: String,

    /// Reported user account name.
    pub username: String,
}

impl CallbackFields {
    /// Extract `hostname` and `username` from a raw query string.
    ///
    /// Keys are matched exactly; the first occurrence wins. Percent
    /// sequences are decoded lossily, so a mangled query still yields
    /// fields instead of an error.
    pub fn from_query(query: &str) -> Self {
        let mut hostname = None;
        let mut username = None;

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "hostname" if hostname.is_none() => hostname = Some(value.into_owned()),
                "username" if username.is_none() => username = Some(value.into_owned()),
                _ => {}
            }
        }

        Self {
            hostname: hostname.unwrap_or_default(),
            username: username.unwrap_or_default(),
        }
    }
}
