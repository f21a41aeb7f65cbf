//! Option values.

/// Value stored for a parsed option.
///
/// Keeps the three cases apart that a plain string cannot:
/// `--flag` gives [`OptionValue::Present`], `--flag=` gives an empty
/// [`OptionValue::Value`], and an option that was never given has no entry at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    /// Option given without `=`
    Present,
    /// Option given as `NAME=VALUE` (value may be empty)
    Value(String),
}

impl OptionValue {
    /// True for a bare `--NAME` option.
    pub fn is_present(&self) -> bool {
        matches!(self, OptionValue::Present)
    }

    /// The string value, or `None` for a bare option.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Present => None,
            OptionValue::Value(s) => Some(s.as_str()),
        }
    }

    /// Consume into the string value, or `None` for a bare option.
    pub fn into_string(self) -> Option<String> {
        match self {
            OptionValue::Present => None,
            OptionValue::Value(s) => Some(s),
        }
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Present => write!(f, "true"),
            OptionValue::Value(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Value(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Value(s)
    }
}

impl PartialEq<str> for OptionValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for OptionValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// `Present == true`; a string value never equals a bool.
impl PartialEq<bool> for OptionValue {
    fn eq(&self, other: &bool) -> bool {
        self.is_present() && *other
    }
}
