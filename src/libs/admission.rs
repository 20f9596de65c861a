//! Task capacity admission policy.
//!
//! A user may own a bounded number of tasks. Once the soft limit is reached
//! every further `add_task` sends the user a reminder, once the hard limit is
//! reached the task is rejected. Both limits are compared against the number
//! of tasks the user owns *before* the new one is added.

use serde::{Deserialize, Serialize};

/// Task count from which a reminder is sent.
pub const DEFAULT_NOTIFY_AT: usize = 8;

/// Task count from which new tasks are rejected.
pub const DEFAULT_REJECT_AT: usize = 10;

/// Subject of the capacity reminder.
pub const REMINDER_SUBJECT: &str = "wake up";

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admit,
    AdmitAndNotify,
    /// The reminder is sent even though the task is then rejected.
    NotifyAndReject,
    Reject,
}

impl Admission {
    pub fn notifies(self) -> bool {
        matches!(self, Admission::AdmitAndNotify | Admission::NotifyAndReject)
    }

    pub fn admits(self) -> bool {
        matches!(self, Admission::Admit | Admission::AdmitAndNotify)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdmissionPolicy {
    /// Owned task count at which the reminder kicks in.
    pub notify_at: usize,

    /// Owned task count at which new tasks are refused.
    pub reject_at: usize,
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        AdmissionPolicy {
            notify_at: DEFAULT_NOTIFY_AT,
            reject_at: DEFAULT_REJECT_AT,
        }
    }
}

impl AdmissionPolicy {
    pub fn new(notify_at: usize, reject_at: usize) -> Self {
        AdmissionPolicy { notify_at, reject_at }
    }

    /// Decides what happens to a task added to a user already owning `current` tasks.
    pub fn decide(&self, current: usize) -> Admission {
        let notify = current >= self.notify_at;
        let reject = current >= self.reject_at;

        match (notify, reject) {
            (false, false) => Admission::Admit,
            (true, false) => Admission::AdmitAndNotify,
            (true, true) => Admission::NotifyAndReject,
            (false, true) => Admission::Reject,
        }
    }

    /// Body of the reminder sent once the soft limit is reached.
    pub fn reminder_body(&self) -> String {
        format!("You have {} tasks left", self.reject_at.saturating_sub(self.notify_at))
    }
}
