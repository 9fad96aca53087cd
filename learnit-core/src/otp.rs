//! OTP entry form and verification state machine
use serde::{Deserialize, Serialize};

/// Number of digit slots in the verification code.
pub const OTP_LEN: usize = 4;

/// Message shown when a rejection body carries no message of its own.
pub const GENERIC_FAILURE: &str = "OTP failed";

fn is_otp_digit(value: &str) -> bool {
    regex::Regex::new(r"^\d$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// Outcome of editing a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotEdit {
    /// The value was stored; focus stays put.
    Accepted,
    /// The value was stored; focus should move to this slot.
    AdvanceTo(usize),
    /// The value was not a digit; the slot is unchanged.
    Rejected,
}

/// The four single-digit entry slots.
///
/// Each slot holds either an empty string or one decimal digit. The form
/// owns the validation rule; the input component only relays element
/// values and applies the reported focus decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpForm {
    slots: [String; OTP_LEN],
}

impl OtpForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn slot(&self, idx: usize) -> &str {
        self.slots.get(idx).map_or("", String::as_str)
    }

    /// Apply an edit to one slot.
    ///
    /// Empty values always clear the slot. Non-empty values are stored
    /// only when they are a single decimal digit; anything else is
    /// rejected and the slot keeps its previous value. Storing a digit
    /// in any slot before the last asks focus to advance.
    pub fn set_slot(&mut self, idx: usize, value: &str) -> SlotEdit {
        let Some(slot) = self.slots.get_mut(idx) else {
            return SlotEdit::Rejected;
        };
        if !value.is_empty() && !is_otp_digit(value) {
            return SlotEdit::Rejected;
        }
        *slot = value.to_string();
        if !value.is_empty() && idx + 1 < OTP_LEN {
            SlotEdit::AdvanceTo(idx + 1)
        } else {
            SlotEdit::Accepted
        }
    }

    /// Where Backspace on slot `idx` should move focus.
    ///
    /// Only an empty slot hands focus backwards; Backspace in a filled
    /// slot clears it in place, and slot 0 never moves.
    #[must_use]
    pub fn backspace_target(&self, idx: usize) -> Option<usize> {
        (idx > 0 && idx < OTP_LEN && self.slots[idx].is_empty()).then(|| idx - 1)
    }

    /// The code as typed, slots concatenated in order.
    #[must_use]
    pub fn code(&self) -> String {
        self.slots.concat()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }
}

/// Where the verification flow currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VerifyPhase {
    #[default]
    Editing,
    Submitting,
    Failed(String),
    Success,
}

impl VerifyPhase {
    /// Enter the submitting phase, clearing any prior failure. A no-op
    /// while a request is already in flight or after success.
    #[must_use]
    pub fn begin_submit(&self) -> Self {
        match self {
            Self::Editing | Self::Failed(_) => Self::Submitting,
            Self::Submitting | Self::Success => self.clone(),
        }
    }

    /// Settle an in-flight submission. Submitting always exits here;
    /// any other phase is left untouched.
    #[must_use]
    pub fn resolve(&self, outcome: Result<(), String>) -> Self {
        match self {
            Self::Submitting => match outcome {
                Ok(()) => Self::Success,
                Err(message) => Self::Failed(message),
            },
            other => other.clone(),
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Body of the verification POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyRequest {
    #[serde(rename = "otpCode")]
    pub otp_code: String,
}

impl VerifyRequest {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            otp_code: code.into(),
        }
    }
}

/// Body of a verification response. Failure bodies carry an optional
/// human-readable message; success bodies are opaque confirmations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VerifyReply {
    #[serde(default)]
    pub message: Option<String>,
}

impl VerifyReply {
    /// The message to show for a rejected code.
    #[must_use]
    pub fn failure_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| GENERIC_FAILURE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_stored_and_advance_focus() {
        let mut form = OtpForm::new();
        assert_eq!(form.set_slot(0, "1"), SlotEdit::AdvanceTo(1));
        assert_eq!(form.set_slot(1, "2"), SlotEdit::AdvanceTo(2));
        assert_eq!(form.set_slot(2, "3"), SlotEdit::AdvanceTo(3));
        assert_eq!(form.set_slot(3, "4"), SlotEdit::Accepted);
        assert_eq!(form.code(), "1234");
        assert!(form.is_complete());
    }

    #[test]
    fn non_digits_are_rejected_without_state_change() {
        let mut form = OtpForm::new();
        form.set_slot(0, "7");
        assert_eq!(form.set_slot(0, "a"), SlotEdit::Rejected);
        assert_eq!(form.set_slot(0, "12"), SlotEdit::Rejected);
        assert_eq!(form.set_slot(0, " "), SlotEdit::Rejected);
        assert_eq!(form.slot(0), "7");
    }

    #[test]
    fn clearing_a_slot_is_accepted_without_advancing() {
        let mut form = OtpForm::new();
        form.set_slot(1, "5");
        assert_eq!(form.set_slot(1, ""), SlotEdit::Accepted);
        assert_eq!(form.slot(1), "");
        assert!(!form.is_complete());
    }

    #[test]
    fn out_of_range_slot_is_rejected() {
        let mut form = OtpForm::new();
        assert_eq!(form.set_slot(OTP_LEN, "1"), SlotEdit::Rejected);
    }

    #[test]
    fn backspace_moves_back_only_from_an_empty_slot() {
        let mut form = OtpForm::new();
        form.set_slot(1, "9");
        assert_eq!(form.backspace_target(1), None);
        form.set_slot(1, "");
        assert_eq!(form.backspace_target(1), Some(0));
        assert_eq!(form.backspace_target(0), None);
    }

    #[test]
    fn code_skips_nothing_and_keeps_order() {
        let mut form = OtpForm::new();
        form.set_slot(0, "4");
        form.set_slot(2, "2");
        assert_eq!(form.code(), "42");
        assert!(!form.is_complete());
    }

    #[test]
    fn begin_submit_clears_a_prior_failure() {
        let failed = VerifyPhase::Failed("Invalid code".to_string());
        assert_eq!(failed.begin_submit(), VerifyPhase::Submitting);
        assert_eq!(VerifyPhase::Editing.begin_submit(), VerifyPhase::Submitting);
    }

    #[test]
    fn begin_submit_is_a_no_op_while_in_flight() {
        assert_eq!(
            VerifyPhase::Submitting.begin_submit(),
            VerifyPhase::Submitting
        );
        assert_eq!(VerifyPhase::Success.begin_submit(), VerifyPhase::Success);
    }

    #[test]
    fn resolution_always_leaves_submitting() {
        let submitting = VerifyPhase::Submitting;
        assert_eq!(submitting.resolve(Ok(())), VerifyPhase::Success);
        assert_eq!(
            submitting.resolve(Err("boom".to_string())),
            VerifyPhase::Failed("boom".to_string())
        );
    }

    #[test]
    fn resolution_outside_submitting_is_inert() {
        assert_eq!(VerifyPhase::Editing.resolve(Ok(())), VerifyPhase::Editing);
        assert_eq!(
            VerifyPhase::Success.resolve(Err("late".to_string())),
            VerifyPhase::Success
        );
    }

    #[test]
    fn request_serializes_with_the_wire_field_name() {
        let request = VerifyRequest::new("1234");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"otpCode":"1234"}"#);
    }

    #[test]
    fn failure_message_prefers_the_body_message() {
        let reply: VerifyReply = serde_json::from_str(r#"{"message":"Invalid code"}"#).unwrap();
        assert_eq!(reply.failure_message(), "Invalid code");
    }

    #[test]
    fn failure_message_falls_back_when_absent() {
        let reply: VerifyReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.failure_message(), GENERIC_FAILURE);
        let null_message: VerifyReply =
            serde_json::from_str(r#"{"message":null}"#).unwrap();
        assert_eq!(null_message.failure_message(), GENERIC_FAILURE);
    }
}
