//! Out-of-band notifications.
//!
//! The user aggregate only talks to the [`Notifier`] trait. Delivery is
//! synchronous and errors go straight back to the caller.

use crate::libs::messages::Message;
use crate::msg_print;
use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to notify {address}: {reason}")]
pub struct NotifyError {
    pub address: String,
    pub reason: String,
}

impl NotifyError {
    pub fn new(address: impl Into<String>, reason: impl Into<String>) -> Self {
        NotifyError {
            address: address.into(),
            reason: reason.into(),
        }
    }
}

/// Sends a message to an address.
pub trait Notifier {
    fn send(&self, address: &str, subject: &str, body: &str) -> Result<(), NotifyError>;
}

/// A message handed to a notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub address: String,
    pub subject: String,
    pub body: String,
}

/// Notifier stub that prints every message and keeps a copy.
///
/// It never fails.
#[derive(Debug, Default)]
pub struct LogNotifier {
    sent: Mutex<Vec<SentMessage>>,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message sent so far, oldest first.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().clone()
    }

    pub fn last(&self) -> Option<SentMessage> {
        self.sent.lock().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().len()
    }
}

impl Notifier for LogNotifier {
    fn send(&self, address: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        msg_print!(Message::NotificationSent {
            to: address.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        self.sent.lock().push(SentMessage {
            address: address.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        Ok(())
    }
}
