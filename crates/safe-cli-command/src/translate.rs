//! Translation of classified operator failures into user-facing messages.
//!
//! Every handler in a [`CommandRegistry`](crate::CommandRegistry) is wrapped
//! once, at [`CommandSpec`](crate::CommandSpec) construction, by
//! [`with_error_translation`]. The wrapper matches the closed [`SafeError`]
//! set exhaustively and emits at most one [`ClassifiedMessage`] per failure.
//! A [`SafeError::GenericOperatorFailure`] without details is logged but shows
//! nothing. Unclassified failures pass through untouched.
//!
//! # Example
//!
//! ```
//! use safe_cli_command::classify;
//! use safe_cli_core::{SafeError, U256};
//!
//! let message = classify(&SafeError::insufficient_balance(U256::from(500u64)))
//!     .expect("has a message");
//! assert_eq!(
//!     message.text(),
//!     "Cannot find enough to send. Current balance is 500"
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use safe_cli_core::{OperatorError, SafeError, SafeOperator, UnclassifiedError};

use crate::registry::Handler;
use crate::value::Arguments;

/// Message severity. Classified failures are always errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The command failed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
        }
    }
}

/// A translated failure, ready to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedMessage {
    severity: Severity,
    text: String,
}

impl ClassifiedMessage {
    /// Create an error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }

    /// The message severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// The filled-in message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ClassifiedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Where translated messages go.
pub trait MessageSink {
    /// Deliver one message.
    fn emit(&mut self, message: ClassifiedMessage);
}

impl MessageSink for Vec<ClassifiedMessage> {
    fn emit(&mut self, message: ClassifiedMessage) {
        self.push(message);
    }
}

/// Translate a classified failure into its message.
///
/// Returns `None` for a [`SafeError::GenericOperatorFailure`] that carries no
/// details.
#[must_use]
pub fn classify(error: &SafeError) -> Option<ClassifiedMessage> {
    let text = match error {
        SafeError::GenericOperatorFailure { message } => message.clone()?,
        SafeError::InsufficientSignatures { missing } => {
            format!("Cannot find enough owners to sign. {missing} missing")
        }
        SafeError::MissingSender => "Please load a default sender".to_string(),
        SafeError::OwnerAlreadyPresent { address } => {
            format!("Owner {address} is already an owner of the Safe")
        }
        SafeError::OwnerNotPresent { address } => {
            format!("Owner {address} is not an owner of the Safe")
        }
        SafeError::ThresholdBelowOwnerFloor => {
            "Having less owners than threshold is not allowed".to_string()
        }
        SafeError::FallbackHandlerUnchanged { address } => {
            format!("Fallback handler {address} is the current one")
        }
        SafeError::FallbackHandlerUnsupported => {
            "Fallback handler is not supported for your Safe, you need to update first".to_string()
        }
        SafeError::MasterCopyUnchanged { address } => {
            format!("Master Copy {address} is the current one")
        }
        SafeError::MasterCopyInvalid { address } => {
            format!("Master Copy {address} is not valid")
        }
        SafeError::AlreadyAtLatestVersion => "Safe is already updated".to_string(),
        SafeError::InsufficientBalance { balance } => {
            format!("Cannot find enough to send. Current balance is {balance}")
        }
    };
    Some(ClassifiedMessage::error(text))
}

/// A handler after translation: only unclassified failures can escape it.
pub type TranslatedHandler = Arc<
    dyn Fn(&mut dyn SafeOperator, &Arguments, &mut dyn MessageSink) -> Result<(), UnclassifiedError>
        + Send
        + Sync,
>;

/// Wrap a handler so classified failures become messages on the sink.
#[must_use]
pub fn with_error_translation(handler: Handler) -> TranslatedHandler {
    Arc::new(
        move |operator: &mut dyn SafeOperator,
              arguments: &Arguments,
              sink: &mut dyn MessageSink| {
            match handler(operator, arguments) {
                Ok(()) => Ok(()),
                Err(OperatorError::Safe(error)) => {
                    match classify(&error) {
                        Some(message) => {
                            tracing::warn!(kind = error.kind_name(), %message, "command failed");
                            sink.emit(message);
                        }
                        None => tracing::warn!(kind = error.kind_name(), "command failed"),
                    }
                    Ok(())
                }
                Err(OperatorError::Unclassified(error)) => Err(error),
            }
        },
    )
}
