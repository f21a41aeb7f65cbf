//! # argsplit
//!
//! Left-to-right command-line classifier.
//!
//! `argsplit` splits an invocation's arguments into **options** (`--flag`,
//! `--name=value`, `-f`) and **params** (everything else). It holds no
//! information about expected arguments and does no type conversion: it
//! only gives every tool the same reading of its argv.
//!
//! ## Quick Start
//!
//! ```rust
//! use argsplit::{CommandLine, Lookup, OptionValue};
//!
//! # fn example() -> Result<(), argsplit::ArgError> {
//! let cmd = CommandLine::builder()
//!     .strict(true)
//!     .allowed_options(&["verbose", "level", "note"])
//!     .short_option('v', "verbose")
//!     .parse_argv(["tool", "-v", "--level=3", "--note=", "input.txt", "--level=9"])?;
//!
//! assert_eq!(cmd.invocation(), "tool");
//! assert_eq!(cmd.get_option("verbose"), Some(&OptionValue::Present));
//! assert_eq!(cmd.option("level", Lookup::Required)?, Some(&OptionValue::from("3")));
//! assert_eq!(cmd.get_option("note"), Some(&OptionValue::from("")));
//! assert_eq!(cmd.params(), ["input.txt", "--level=9"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Grammar
//!
//! - The scan reads options until a token does not start with `--`; that
//!   token and every one after it are params, verbatim.
//! - A bare `--` is recorded as the option `"--"` and ends the options region.
//! - `--NAME`, `--NAME=` and `--NAME=VALUE` are options, where `NAME` is
//!   `[A-Za-z0-9][A-Za-z0-9_-]*` and `VALUE` is anything.
//! - `-X` and `-X=VALUE` (one word character) are rewritten to the long form,
//!   through the short-option map if `X` is mapped.
//! - Other `--` tokens are malformed: skipped, or an error in strict mode.
//!
//! The library never prints. Decisions are reported through the [`log`]
//! facade at `trace`/`debug` level for hosts that install a logger.

mod builder;
mod command_line;
mod error;
mod grammar;
mod value;

// Public API
pub use builder::CommandLineBuilder;
pub use command_line::{CommandLine, Lookup};
pub use error::{ArgError, ErrorCode};
pub use grammar::BREAK;
pub use value::OptionValue;
