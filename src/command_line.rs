//! The classified command line.
//!
//! `CommandLine` is produced by a single left-to-right scan. Tokens are
//! read as options until one of them is not option-shaped or is the bare
//! `--` break; from there on everything is a param, untouched.

use crate::builder::CommandLineBuilder;
use crate::error::ArgError;
use crate::grammar::{classify, rewrite_short, Token, BREAK};
use crate::value::OptionValue;
use indexmap::IndexMap;
use std::io;
use std::path::PathBuf;

/// Whether a lookup treats absence as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lookup {
    /// Absence is `Ok(None)` (default).
    #[default]
    Optional,
    /// Absence is an error.
    Required,
}

/// Arguments of one invocation, split into options and params.
///
/// Immutable once built. Create using [`CommandLine::new`] for the lenient
/// defaults or [`CommandLine::builder`] to configure the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Element 0 of argv.
    invocation: String,

    /// Options in the order they were first seen.
    options: IndexMap<String, OptionValue>,

    /// Everything after the options region.
    params: Vec<String>,
}

impl CommandLine {
    /// Create a new builder.
    pub fn builder() -> CommandLineBuilder {
        CommandLineBuilder::new()
    }

    /// Classify `argv` (element 0 being the invocation name) with the lenient defaults.
    ///
    /// Lenient parsing cannot fail, so this returns the value directly.
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match CommandLineBuilder::new().parse_argv(argv) {
            Ok(cmd) => cmd,
            Err(e) => unreachable!("lenient scan failed: {e}"),
        }
    }

    /// Classify the arguments of the running process with the lenient defaults.
    pub fn from_env() -> Self {
        Self::new(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()))
    }

    pub(crate) fn scan(
        invocation: String,
        mut raw: Vec<String>,
        rules: &CommandLineBuilder,
    ) -> Result<Self, ArgError> {
        let region = scan_options(&raw, rules)?;
        let params = raw.split_off(region.consumed);
        log::debug!(
            "classified {} option(s) and {} param(s)",
            region.options.len(),
            params.len()
        );
        Ok(Self {
            invocation,
            options: region.options,
            params,
        })
    }

    /// Element 0 of argv: the name the program was invoked as.
    pub fn invocation(&self) -> &str {
        &self.invocation
    }

    /// Path of the running executable.
    ///
    /// Unlike [`invocation`](Self::invocation) this does not depend on how
    /// the program was called.
    pub fn binary(&self) -> io::Result<PathBuf> {
        std::env::current_exe()
    }

    /// All options, in scan order.
    pub fn options(&self) -> &IndexMap<String, OptionValue> {
        &self.options
    }

    /// Look up an option.
    ///
    /// # Errors
    ///
    /// With [`Lookup::Required`], returns [`ArgError::NonexistentOption`]
    /// if the option was not given.
    pub fn option(&self, name: &str, lookup: Lookup) -> Result<Option<&OptionValue>, ArgError> {
        match (self.options.get(name), lookup) {
            (Some(value), _) => Ok(Some(value)),
            (None, Lookup::Optional) => Ok(None),
            (None, Lookup::Required) => Err(ArgError::NonexistentOption {
                name: name.to_string(),
            }),
        }
    }

    /// Look up an option, `None` if it was not given.
    pub fn get_option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// Whether the option was given at all.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// All params, in their original order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Look up a param by zero-based index.
    ///
    /// # Errors
    ///
    /// A negative index is always [`ArgError::InvalidIndex`]. With
    /// [`Lookup::Required`], an index past the end is [`ArgError::NonexistentParam`].
    pub fn param(&self, index: isize, lookup: Lookup) -> Result<Option<&str>, ArgError> {
        let Ok(idx) = usize::try_from(index) else {
            return Err(ArgError::InvalidIndex { index });
        };

        match (self.get_param(idx), lookup) {
            (Some(param), _) => Ok(Some(param)),
            (None, Lookup::Optional) => Ok(None),
            (None, Lookup::Required) => Err(ArgError::NonexistentParam { index: idx }),
        }
    }

    /// Look up a param, `None` if the index is past the end.
    pub fn get_param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// Consume into `(invocation, options, params)`.
    pub fn into_parts(self) -> (String, IndexMap<String, OptionValue>, Vec<String>) {
        (self.invocation, self.options, self.params)
    }
}

/// Result of scanning the options region.
struct OptionsRegion {
    options: IndexMap<String, OptionValue>,
    /// Number of leading tokens that belong to the options region.
    consumed: usize,
}

fn scan_options(raw: &[String], rules: &CommandLineBuilder) -> Result<OptionsRegion, ArgError> {
    let mut options = IndexMap::new();
    let mut consumed = 0;

    for token in raw {
        let rewritten = rewrite_short(token, &rules.short_options);

        match classify(&rewritten) {
            Token::NotOption => break,
            Token::Break => {
                consumed += 1;
                options.insert(BREAK.to_string(), OptionValue::Present);
                break;
            }
            Token::Malformed => {
                consumed += 1;
                if rules.strict {
                    return Err(ArgError::InvalidArgument { arg: token.clone() });
                }
                log::trace!("skipping malformed argument {token:?}");
            }
            Token::Option { name, value } => {
                consumed += 1;
                if !rules.is_allowed(name) {
                    if rules.strict {
                        return Err(ArgError::DisallowedOption {
                            name: name.to_string(),
                        });
                    }
                    log::trace!("dropping option {name:?}: not in the allow-list");
                    continue;
                }
                options.insert(name.to_string(), value);
            }
        }
    }

    Ok(OptionsRegion { options, consumed })
}
