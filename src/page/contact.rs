//! Contact form: field validation and the submit state machine.
//!
//! Validation failures are plain values ([`FieldErrors`]) holding translation
//! keys; they never become a [`FolioError`](crate::FolioError). Only a
//! submission that passed validation reaches `Loading`.

use crate::{
    animation::timer::{Scheduler, TimerHandle},
    foundation::error::FolioResult,
};

pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const MESSAGE_MAX: usize = 1000;
pub const SUBMIT_LATENCY_MS: u64 = 1500;
/// How long the success or error state stays on the button.
pub const STATUS_RESET_MS: u64 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Raw form input as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// A trimmed draft that passed validation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field validation failures as `contact.validation.*` keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    fn set(&mut self, field: Field, error: Option<&'static str>) {
        match field {
            Field::Name => self.name = error,
            Field::Email => self.email = error,
            Field::Message => self.message = error,
        }
    }
}

/// First failing rule for `field`, checked in the order required, format,
/// length. Lengths count characters after trimming.
pub fn validate_field(field: Field, raw: &str) -> Option<&'static str> {
    let value = raw.trim();
    let len = value.chars().count();
    match field {
        Field::Name if len == 0 => Some("contact.validation.nameRequired"),
        Field::Name if len > NAME_MAX => Some("contact.validation.nameMax"),
        Field::Email if len == 0 => Some("contact.validation.emailRequired"),
        Field::Email if !is_valid_email(value) => Some("contact.validation.emailInvalid"),
        Field::Email if len > EMAIL_MAX => Some("contact.validation.emailMax"),
        Field::Message if len == 0 => Some("contact.validation.messageRequired"),
        Field::Message if len > MESSAGE_MAX => Some("contact.validation.messageMax"),
        _ => None,
    }
}

pub fn validate(draft: &ContactDraft) -> Result<ContactMessage, FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        errors.set(field, validate_field(field, draft.get(field)));
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ContactMessage {
        name: draft.name.trim().to_string(),
        email: draft.email.trim().to_string(),
        message: draft.message.trim().to_string(),
    })
}

/// `local@domain.tld` check: the local part uses letters, digits and
/// `_ ' + - .` (no leading dot, no `..`, last char not `'` or `.`); the
/// domain is dot-separated labels that start with a letter or digit, ending
/// in an alphabetic TLD of at least two letters.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.starts_with('.') || local.contains("..") {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_'+-.".contains(c));
    let last_ok = local
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_alphanumeric() || "_+-".contains(c));
    if !(local_ok && last_ok) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };
    if hosts.is_empty() || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    hosts.iter().all(|label| {
        label
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Submit button label key.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Idle => "contact.form.submit",
            Self::Loading => "contact.form.sending",
            Self::Success => "contact.form.success",
            Self::Error => "contact.form.error",
        }
    }
}

/// Delivery endpoint for validated messages.
pub trait Submitter {
    /// Artificial or expected round-trip time before the result is known.
    fn latency_ms(&self) -> u64 {
        SUBMIT_LATENCY_MS
    }

    fn deliver(&mut self, message: &ContactMessage) -> FolioResult<()>;
}

/// Stand-in endpoint that accepts everything and records what it got.
#[derive(Clone, Debug, Default)]
pub struct SimulatedSubmitter {
    delivered: Vec<ContactMessage>,
}

impl SimulatedSubmitter {
    pub fn delivered(&self) -> &[ContactMessage] {
        &self.delivered
    }
}

impl Submitter for SimulatedSubmitter {
    fn deliver(&mut self, message: &ContactMessage) -> FolioResult<()> {
        tracing::debug!(name = %message.name, email = %message.email, "contact message delivered");
        self.delivered.push(message.clone());
        Ok(())
    }
}

/// Result of pressing submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; status unchanged.
    Invalid(FieldErrors),
    /// A submission is already in flight.
    Busy,
    Started,
}

#[derive(Debug)]
pub struct ContactForm<S: Submitter = SimulatedSubmitter> {
    draft: ContactDraft,
    errors: FieldErrors,
    status: SubmitStatus,
    pending: Option<ContactMessage>,
    timer: Option<TimerHandle>,
    submitter: S,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(SimulatedSubmitter::default())
    }
}

impl<S: Submitter> ContactForm<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            draft: ContactDraft::default(),
            errors: FieldErrors::default(),
            status: SubmitStatus::Idle,
            pending: None,
            timer: None,
            submitter,
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.status == SubmitStatus::Loading
    }

    /// Update a field. A field already showing an error is re-validated as
    /// the user types.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if self.errors.get(field).is_some() {
            self.errors.set(field, validate_field(field, &value));
        }
        *self.draft.slot(field) = value;
    }

    pub fn fill(&mut self, draft: ContactDraft) {
        for field in Field::ALL {
            self.set_field(field, draft.get(field));
        }
    }

    pub fn submit(&mut self, scheduler: &mut Scheduler) -> SubmitOutcome {
        if self.status == SubmitStatus::Loading {
            return SubmitOutcome::Busy;
        }
        let message = match validate(&self.draft) {
            Ok(message) => message,
            Err(errors) => {
                tracing::debug!(?errors, "contact form rejected");
                self.errors = errors.clone();
                return SubmitOutcome::Invalid(errors);
            }
        };
        self.errors = FieldErrors::default();
        self.pending = Some(message);
        self.set_status(SubmitStatus::Loading, scheduler, self.submitter.latency_ms());
        SubmitOutcome::Started
    }

    fn set_status(&mut self, status: SubmitStatus, scheduler: &mut Scheduler, hold_ms: u64) {
        if let Some(old) = self.timer.take() {
            scheduler.cancel(old);
        }
        tracing::debug!(from = ?self.status, to = ?status, "submit status");
        self.status = status;
        if status != SubmitStatus::Idle {
            self.timer = Some(scheduler.after(hold_ms));
        }
    }

    /// Handle fired timers: finish a pending delivery, or drop the
    /// success/error state back to idle.
    pub fn dispatch(&mut self, fired: &[TimerHandle], scheduler: &mut Scheduler) {
        let Some(own) = self.timer else {
            return;
        };
        if !fired.contains(&own) {
            return;
        }
        self.timer = None;
        match self.status {
            SubmitStatus::Loading => {
                let delivered = match self.pending.take() {
                    Some(message) => self.submitter.deliver(&message),
                    None => Ok(()),
                };
                match delivered {
                    Ok(()) => {
                        self.draft = ContactDraft::default();
                        self.set_status(SubmitStatus::Success, scheduler, STATUS_RESET_MS);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "contact submission failed");
                        self.set_status(SubmitStatus::Error, scheduler, STATUS_RESET_MS);
                    }
                }
            }
            SubmitStatus::Success | SubmitStatus::Error => {
                self.set_status(SubmitStatus::Idle, scheduler, 0);
            }
            SubmitStatus::Idle => {}
        }
    }

    /// Abandon any pending submission or status reset.
    pub fn teardown(&mut self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
        self.pending = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/contact.rs"]
mod tests;
