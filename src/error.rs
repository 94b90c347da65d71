use std::error;
use std::ffi::OsString;
use std::fmt;

/// An environment variable that is set but unusable.
#[derive(Debug)]
pub(crate) struct InvalidVarError {
    key: &'static str,
    val: OsString,
    reason: InvalidVarReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InvalidVarReason {
    InvalidUtf8,
    ParseError,
}

impl InvalidVarError {
    pub(crate) const fn invalid_utf8(key: &'static str, val: OsString) -> Self {
        Self {
            key,
            val,
            reason: InvalidVarReason::InvalidUtf8,
        }
    }

    pub(crate) const fn parse_error(key: &'static str, val: OsString) -> Self {
        Self {
            key,
            val,
            reason: InvalidVarReason::ParseError,
        }
    }

    #[cfg(test)]
    pub(crate) fn reason(&self) -> InvalidVarReason {
        self.reason
    }
}

impl fmt::Display for InvalidVarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            InvalidVarReason::InvalidUtf8 => {
                write!(f, "{} is not valid utf8: {:?}", self.key, self.val)
            }
            InvalidVarReason::ParseError => {
                write!(f, "{} could not be parsed: {:?}", self.key, self.val)
            }
        }
    }
}

impl error::Error for InvalidVarError {}
