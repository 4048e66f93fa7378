//! Command registry and line resolution.
//!
//! The registry maps command names to [`CommandSpec`]s. Resolving a line looks
//! up its first token and parses the remaining tokens against the command's
//! [`ArgumentSpec`]s, producing a [`ParsedCommand`] ready for dispatch.
//!
//! # Design
//!
//! - **Data-driven**: commands are table entries, not parser code
//! - **Fail-fast**: a line either resolves completely or no handler runs
//! - **Cheap to clone**: specs live behind an [`Arc`]
//!
//! # Example
//!
//! ```
//! use safe_cli_command::{ArgKind, ArgumentSpec, CommandRegistry, CommandSpec};
//!
//! let mut registry = CommandRegistry::empty();
//! registry
//!     .register(CommandSpec::new(
//!         "change_threshold",
//!         vec![ArgumentSpec::one("threshold", ArgKind::Integer)],
//!         |operator, args| operator.change_threshold(args.integer(0)?),
//!     ))
//!     .expect("valid spec");
//!
//! let parsed = registry.resolve("change_threshold 2").expect("valid line");
//! assert_eq!(parsed.arguments().integer(0), Ok(safe_cli_core::Integer::from(2i64)));
//!
//! assert!(registry.resolve("change_threshold two").is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use safe_cli_core::{OperatorError, SafeOperator, UnclassifiedError};

use crate::error::{ArgumentError, RegistryError, ResolveError};
use crate::translate::{with_error_translation, MessageSink, TranslatedHandler};
use crate::value::{Argument, ArgumentSpec, Arguments, Arity};

/// A command handler before translation.
///
/// Handlers read their typed arguments and call exactly one operator method.
pub type Handler = fn(&mut dyn SafeOperator, &Arguments) -> Result<(), OperatorError>;

/// A registered command: name, argument grammar and translated handler.
#[derive(Clone)]
pub struct CommandSpec {
    name: &'static str,
    summary: &'static str,
    arguments: Vec<ArgumentSpec>,
    invoker: TranslatedHandler,
}

impl CommandSpec {
    /// Create a spec, wrapping `handler` with error translation.
    #[must_use]
    pub fn new(name: &'static str, arguments: Vec<ArgumentSpec>, handler: Handler) -> Self {
        Self {
            name,
            summary: "",
            arguments,
            invoker: with_error_translation(handler),
        }
    }

    /// Attach a one-line description shown by `help`.
    #[must_use]
    pub const fn with_summary(mut self, summary: &'static str) -> Self {
        self.summary = summary;
        self
    }

    /// The command name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The one-line description.
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        self.summary
    }

    /// The positional arguments in order.
    #[must_use]
    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    /// Usage line, e.g. `send_ether <address> <value>`.
    #[must_use]
    pub fn usage(&self) -> String {
        std::iter::once(self.name.to_string())
            .chain(self.arguments.iter().map(ArgumentSpec::usage))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn check(&self) -> Result<(), RegistryError> {
        let last = self.arguments.len().saturating_sub(1);
        match self
            .arguments
            .iter()
            .enumerate()
            .find(|(index, spec)| spec.arity == Arity::OneOrMore && *index != last)
        {
            Some((_, spec)) => Err(RegistryError::VariadicNotLast {
                command: self.name,
                argument: spec.name,
            }),
            None => Ok(()),
        }
    }

    fn parse_arguments(&self, tokens: &[&str]) -> Result<Arguments, ResolveError> {
        let mut resolved = Vec::with_capacity(self.arguments.len());
        let mut position = 0;

        for spec in &self.arguments {
            let remaining = tokens.get(position..).unwrap_or_default();
            match spec.arity {
                Arity::Exactly1 => {
                    let token = remaining
                        .first()
                        .ok_or_else(|| ArgumentError::missing(self.name, spec.name))?;
                    resolved.push(Argument::One(spec.parse_token(token)?));
                    position += 1;
                }
                Arity::OneOrMore => {
                    if remaining.is_empty() {
                        return Err(ArgumentError::missing(self.name, spec.name).into());
                    }
                    let values = remaining
                        .iter()
                        .map(|token| spec.parse_token(token))
                        .collect::<Result<Vec<_>, _>>()?;
                    resolved.push(Argument::Many(values));
                    position = tokens.len();
                }
            }
        }

        if position < tokens.len() {
            let extra = tokens[position..].iter().map(ToString::to_string).collect();
            return Err(ArgumentError::unexpected(self.name, extra).into());
        }

        Ok(Arguments::new(resolved))
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

/// A line resolved against the registry, ready to run.
#[derive(Debug)]
pub struct ParsedCommand<'r> {
    spec: &'r CommandSpec,
    arguments: Arguments,
}

impl ParsedCommand<'_> {
    /// The matched command name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.spec.name
    }

    /// The resolved arguments.
    #[must_use]
    pub const fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Run the translated handler.
    ///
    /// Classified failures are emitted on `sink` and count as handled.
    ///
    /// # Errors
    ///
    /// Returns the [`UnclassifiedError`] if the operator failed outside the
    /// classified set.
    pub fn invoke(
        self,
        operator: &mut dyn SafeOperator,
        sink: &mut dyn MessageSink,
    ) -> Result<(), UnclassifiedError> {
        (self.spec.invoker)(operator, &self.arguments, sink)
    }
}

impl PartialEq for ParsedCommand<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.spec.name == other.spec.name && self.arguments == other.arguments
    }
}

/// Registry of console commands.
///
/// Use [`default_registry`](crate::default_registry) for the full console
/// table or [`CommandRegistry::empty`] to build one by hand.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: Arc<HashMap<&'static str, CommandSpec>>,
}

impl CommandRegistry {
    /// Create a registry with every console command.
    #[must_use]
    pub fn new() -> Self {
        crate::table::default_registry()
    }

    /// Create an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a registry from specs, rejecting the first invalid one.
    ///
    /// # Errors
    ///
    /// See [`Self::register`].
    pub fn from_specs(specs: impl IntoIterator<Item = CommandSpec>) -> Result<Self, RegistryError> {
        let mut registry = Self::empty();
        for spec in specs {
            registry.register(spec)?;
        }
        Ok(registry)
    }

    /// Register a command.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateCommand`] if the name is taken and
    /// [`RegistryError::VariadicNotLast`] if a one-or-more argument is not last.
    pub fn register(&mut self, spec: CommandSpec) -> Result<(), RegistryError> {
        if self.supports(spec.name) {
            return Err(RegistryError::DuplicateCommand { name: spec.name });
        }
        spec.check()?;
        Arc::make_mut(&mut self.commands).insert(spec.name, spec);
        Ok(())
    }

    /// Look up a command by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn supports(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Registered specs, sorted by name.
    #[must_use]
    pub fn specs(&self) -> Vec<&CommandSpec> {
        let mut specs: Vec<_> = self.commands.values().collect();
        specs.sort_unstable_by_key(|spec| spec.name);
        specs
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Resolve a line into a command and its typed arguments.
    ///
    /// Tokens are whitespace-separated; the first names the command. No
    /// operator is called and the registry is not modified.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Empty`] for a blank line
    /// - [`ResolveError::UnknownCommand`] for an unregistered name
    /// - [`ResolveError::Argument`] for missing, extra or non-integer tokens
    /// - [`ResolveError::Format`] for an address that is not checksummed
    pub fn resolve(&self, line: &str) -> Result<ParsedCommand<'_>, ResolveError> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().ok_or(ResolveError::Empty)?;
        let spec = self
            .get(name)
            .ok_or_else(|| ResolveError::unknown_command(name))?;
        let rest: Vec<&str> = tokens.collect();
        let arguments = spec.parse_arguments(&rest)?;

        tracing::debug!(command = spec.name, arguments = arguments.len(), "resolved line");
        Ok(ParsedCommand { spec, arguments })
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}
