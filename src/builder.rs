//! Parser configuration.
//!
//! `CommandLineBuilder` holds everything the scan needs besides the tokens:
//! strictness, the optional allow-list and the short-option map.

use crate::command_line::CommandLine;
use crate::error::ArgError;
use std::collections::{HashMap, HashSet};

/// Builder for [`CommandLine`].
///
/// Create using `CommandLine::builder()`. The defaults are lenient: malformed
/// tokens are skipped, every option name is accepted, no short options are mapped.
#[derive(Debug, Clone, Default)]
pub struct CommandLineBuilder {
    /// Raise errors instead of skipping malformed or disallowed options.
    pub(crate) strict: bool,

    /// Permitted option names.
    ///
    /// `None` means no restriction. `Some` of an empty set permits nothing.
    pub(crate) allowed_options: Option<HashSet<String>>,

    /// Short option character to long option name.
    pub(crate) short_options: HashMap<char, String>,
}

impl CommandLineBuilder {
    /// Create a new builder with default (lenient) settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject malformed tokens and disallowed option names with an error.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the allow-list from a slice, replacing any previous one.
    ///
    /// An empty slice still counts as an allow-list: no option gets through.
    pub fn allowed_options(mut self, names: &[&str]) -> Self {
        self.allowed_options = Some(names.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Add a single allowed option name, starting an allow-list if there is none.
    pub fn allow_option(mut self, name: impl Into<String>) -> Self {
        self.allowed_options
            .get_or_insert_with(HashSet::new)
            .insert(name.into());
        self
    }

    /// Map the short option `-short` to `--long`.
    pub fn short_option(mut self, short: char, long: impl Into<String>) -> Self {
        self.short_options.insert(short, long.into());
        self
    }

    /// Set the whole short option map, replacing any previous one.
    pub fn short_options(mut self, map: HashMap<char, String>) -> Self {
        self.short_options = map;
        self
    }

    /// Whether `name` passes the allow-list.
    pub(crate) fn is_allowed(&self, name: &str) -> bool {
        self.allowed_options
            .as_ref()
            .map_or(true, |allowed| allowed.contains(name))
    }

    /// Classify `raw_arguments` (the invocation name already removed).
    ///
    /// # Errors
    ///
    /// In strict mode returns [`ArgError::InvalidArgument`] for a malformed
    /// option token and [`ArgError::DisallowedOption`] for a name outside the
    /// allow-list. Lenient mode never fails.
    pub fn parse<I, S>(
        &self,
        invocation: impl Into<String>,
        raw_arguments: I,
    ) -> Result<CommandLine, ArgError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: Vec<String> = raw_arguments.into_iter().map(Into::into).collect();
        CommandLine::scan(invocation.into(), raw, self)
    }

    /// Classify a full argv; element 0 is the invocation name.
    ///
    /// An empty argv yields an empty invocation name and nothing else.
    pub fn parse_argv<I, S>(&self, argv: I) -> Result<CommandLine, ArgError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let invocation: String = argv.next().unwrap_or_default();
        CommandLine::scan(invocation, argv.collect(), self)
    }

    /// Classify the arguments of the running process.
    ///
    /// Non UTF-8 arguments are converted lossily.
    pub fn parse_env(&self) -> Result<CommandLine, ArgError> {
        self.parse_argv(
            std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
        )
    }
}
