//! Argument specifications and resolved argument values.
//!
//! A [`CommandSpec`](crate::CommandSpec) declares its positional arguments as
//! [`ArgumentSpec`]s. Resolving a line produces [`Arguments`], one
//! [`Argument`] per declared spec, in declaration order.

use std::fmt;

use safe_cli_core::{address, Address, Integer};

use crate::error::{ArgumentError, ResolveError};

/// How a token is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// Passed through unchanged.
    RawString,
    /// Must be a checksummed address.
    EthereumAddress,
    /// Base-10 signed integer, up to 256 bits of magnitude.
    Integer,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RawString => write!(f, "string"),
            Self::EthereumAddress => write!(f, "address"),
            Self::Integer => write!(f, "int"),
        }
    }
}

/// How many tokens an argument consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly one token.
    Exactly1,
    /// Every remaining token, at least one. Only valid as the last argument.
    OneOrMore,
}

/// Declaration of one positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentSpec {
    /// Name shown in usage and error messages.
    pub name: &'static str,
    /// Token interpretation.
    pub kind: ArgKind,
    /// Token count.
    pub arity: Arity,
}

impl ArgumentSpec {
    /// A single-token argument.
    #[must_use]
    pub const fn one(name: &'static str, kind: ArgKind) -> Self {
        Self {
            name,
            kind,
            arity: Arity::Exactly1,
        }
    }

    /// A one-or-more argument.
    #[must_use]
    pub const fn many(name: &'static str, kind: ArgKind) -> Self {
        Self {
            name,
            kind,
            arity: Arity::OneOrMore,
        }
    }

    /// Parse a single token according to [`Self::kind`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Format`] for a bad address and
    /// [`ResolveError::Argument`] for a bad integer.
    pub fn parse_token(&self, token: &str) -> Result<ArgValue, ResolveError> {
        match self.kind {
            ArgKind::RawString => Ok(ArgValue::Raw(token.to_string())),
            ArgKind::EthereumAddress => Ok(ArgValue::Address(address::validate(token)?)),
            ArgKind::Integer => token
                .parse::<Integer>()
                .map(ArgValue::Integer)
                .map_err(|_| ArgumentError::invalid_integer(self.name, token).into()),
        }
    }

    /// Usage fragment, e.g. `<address>` or `<keys>...`.
    #[must_use]
    pub fn usage(&self) -> String {
        match self.arity {
            Arity::Exactly1 => format!("<{}>", self.name),
            Arity::OneOrMore => format!("<{}>...", self.name),
        }
    }
}

/// A single parsed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// An unchanged token.
    Raw(String),
    /// A validated address.
    Address(Address),
    /// A parsed integer.
    Integer(Integer),
}

/// The resolved value of one [`ArgumentSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// From an [`Arity::Exactly1`] spec.
    One(ArgValue),
    /// From an [`Arity::OneOrMore`] spec; never empty.
    Many(Vec<ArgValue>),
}

/// Resolved arguments in declaration order.
///
/// Handlers read slots by position with the typed accessors. Reading a slot
/// with the wrong shape or kind yields [`ArgumentError::Mismatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments(Vec<Argument>);

impl Arguments {
    /// Wrap resolved arguments.
    #[must_use]
    pub const fn new(arguments: Vec<Argument>) -> Self {
        Self(arguments)
    }

    /// Number of resolved slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for commands without arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over slots.
    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.0.iter()
    }

    fn one(&self, index: usize, kind: ArgKind) -> Result<&ArgValue, ArgumentError> {
        match self.0.get(index) {
            Some(Argument::One(value)) => Ok(value),
            _ => Err(ArgumentError::mismatch(index, kind, false)),
        }
    }

    fn many(&self, index: usize, kind: ArgKind) -> Result<&[ArgValue], ArgumentError> {
        match self.0.get(index) {
            Some(Argument::Many(values)) => Ok(values),
            _ => Err(ArgumentError::mismatch(index, kind, true)),
        }
    }

    /// Address at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Mismatch`] if the slot is not a single address.
    pub fn address(&self, index: usize) -> Result<Address, ArgumentError> {
        match self.one(index, ArgKind::EthereumAddress)? {
            ArgValue::Address(address) => Ok(*address),
            _ => Err(ArgumentError::mismatch(index, ArgKind::EthereumAddress, false)),
        }
    }

    /// Integer at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Mismatch`] if the slot is not a single integer.
    pub fn integer(&self, index: usize) -> Result<Integer, ArgumentError> {
        match self.one(index, ArgKind::Integer)? {
            ArgValue::Integer(value) => Ok(*value),
            _ => Err(ArgumentError::mismatch(index, ArgKind::Integer, false)),
        }
    }

    /// Addresses of the variadic slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Mismatch`] if the slot is not a list of addresses.
    pub fn addresses(&self, index: usize) -> Result<Vec<Address>, ArgumentError> {
        self.many(index, ArgKind::EthereumAddress)?
            .iter()
            .map(|value| match value {
                ArgValue::Address(address) => Ok(*address),
                _ => Err(ArgumentError::mismatch(index, ArgKind::EthereumAddress, true)),
            })
            .collect()
    }

    /// Raw strings of the variadic slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Mismatch`] if the slot is not a list of strings.
    pub fn raw_list(&self, index: usize) -> Result<Vec<String>, ArgumentError> {
        self.many(index, ArgKind::RawString)?
            .iter()
            .map(|value| match value {
                ArgValue::Raw(raw) => Ok(raw.clone()),
                _ => Err(ArgumentError::mismatch(index, ArgKind::RawString, true)),
            })
            .collect()
    }
}
