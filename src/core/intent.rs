//! Rule-based intent classification for run requests

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification outcome for a run request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    BookingRequest,
    SupportRequest,
    InformationRequest,
    GeneralInquiry,
}

impl IntentLabel {
    pub const ALL: [IntentLabel; 4] = [
        IntentLabel::BookingRequest,
        IntentLabel::SupportRequest,
        IntentLabel::InformationRequest,
        IntentLabel::GeneralInquiry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentLabel::BookingRequest => "booking_request",
            IntentLabel::SupportRequest => "support_request",
            IntentLabel::InformationRequest => "information_request",
            IntentLabel::GeneralInquiry => "general_inquiry",
        }
    }
}

impl fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered rules: (action keyword, reason keyword, label). First match wins.
const RULES: &[(&str, &str, IntentLabel)] = &[
    ("booking", "rezerv", IntentLabel::BookingRequest),
    ("support", "help", IntentLabel::SupportRequest),
    ("info", "informacij", IntentLabel::InformationRequest),
];

/// Map free-text `reason` and `action` to an intent label.
///
/// Matching is a case-insensitive substring test on each field independently.
pub fn classify(reason: &str, action: &str) -> IntentLabel {
    let reason = reason.to_lowercase();
    let action = action.to_lowercase();

    RULES
        .iter()
        .find(|(action_kw, reason_kw, _)| action.contains(action_kw) || reason.contains(reason_kw))
        .map(|&(_, _, label)| label)
        .unwrap_or(IntentLabel::GeneralInquiry)
}
