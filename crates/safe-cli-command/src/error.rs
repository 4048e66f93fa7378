//! Errors raised while registering commands and resolving lines.
//!
//! - [`ResolveError`] - A line could not be turned into a [`ParsedCommand`](crate::ParsedCommand)
//! - [`ArgumentError`] - An argument token was missing, extra or malformed
//! - [`RegistryError`] - A [`CommandSpec`](crate::CommandSpec) was rejected at registration

use safe_cli_core::{FormatError, OperatorError};

use crate::value::ArgKind;

/// A line that could not be resolved into a command.
///
/// Resolution fails before any handler runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The line held no command token.
    #[error("empty command line")]
    Empty,

    /// The command token is not registered.
    #[error("unknown command: {name}")]
    UnknownCommand {
        /// The unrecognized token.
        name: String,
    },

    /// An argument was missing, unexpected or malformed.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// An address argument was not checksummed.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl ResolveError {
    /// Create an `UnknownCommand` error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }
}

/// Problems with individual argument tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// A required argument had no token.
    #[error("{command}: the following arguments are required: {argument}")]
    Missing {
        /// The command being parsed.
        command: String,
        /// The argument with no token.
        argument: &'static str,
    },

    /// Tokens were left after every argument was filled.
    #[error("{command}: unrecognized arguments: {}", .tokens.join(" "))]
    Unexpected {
        /// The command being parsed.
        command: String,
        /// The leftover tokens.
        tokens: Vec<String>,
    },

    /// An integer argument was not a base-10 integer.
    #[error("argument {argument}: invalid int value: '{value}'")]
    InvalidInteger {
        /// The argument being parsed.
        argument: &'static str,
        /// The rejected token.
        value: String,
    },

    /// A handler read an argument slot with the wrong shape or kind.
    #[error("argument {index} is not {expected}")]
    Mismatch {
        /// Position of the slot.
        index: usize,
        /// What the handler expected.
        expected: &'static str,
    },
}

impl ArgumentError {
    /// Create a `Missing` error.
    #[must_use]
    pub fn missing(command: impl Into<String>, argument: &'static str) -> Self {
        Self::Missing {
            command: command.into(),
            argument,
        }
    }

    /// Create an `Unexpected` error.
    #[must_use]
    pub fn unexpected(command: impl Into<String>, tokens: Vec<String>) -> Self {
        Self::Unexpected {
            command: command.into(),
            tokens,
        }
    }

    /// Create an `InvalidInteger` error.
    #[must_use]
    pub fn invalid_integer(argument: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInteger {
            argument,
            value: value.into(),
        }
    }

    /// Create a `Mismatch` error for a slot read as `kind`.
    #[must_use]
    pub const fn mismatch(index: usize, kind: ArgKind, variadic: bool) -> Self {
        let expected = match (kind, variadic) {
            (ArgKind::RawString, false) => "a string",
            (ArgKind::RawString, true) => "a list of strings",
            (ArgKind::EthereumAddress, false) => "an address",
            (ArgKind::EthereumAddress, true) => "a list of addresses",
            (ArgKind::Integer, false) => "an integer",
            (ArgKind::Integer, true) => "a list of integers",
        };
        Self::Mismatch { index, expected }
    }
}

// A handler reading the wrong slot is a table bug, not a wallet failure.
impl From<ArgumentError> for OperatorError {
    fn from(error: ArgumentError) -> Self {
        Self::unclassified(error)
    }
}

/// A command specification rejected at registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A command with this name is already registered.
    #[error("command already registered: {name}")]
    DuplicateCommand {
        /// The duplicated name.
        name: &'static str,
    },

    /// A one-or-more argument is followed by another argument.
    #[error("{command}: variadic argument {argument} must be the last argument")]
    VariadicNotLast {
        /// The offending command.
        command: &'static str,
        /// The variadic argument.
        argument: &'static str,
    },
}
