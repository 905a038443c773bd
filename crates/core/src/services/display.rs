//! Derived display values the pages repeat: badge tones, status labels and
//! description previews.

use scamguard_client::models::{UserRole, UserStatus};

use crate::services::recency::Priority;

/// Display cap applied to report descriptions in card lists.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// Badge color classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Pink,
    Purple,
    Gray,
}

/// Tone for a report's workflow status. Unknown statuses fall back to gray.
#[must_use]
pub fn status_tone(status: &str) -> Tone {
    match status {
        "open" => Tone::Red,
        "in-progress" => Tone::Yellow,
        "closed" => Tone::Green,
        "pending" => Tone::Blue,
        _ => Tone::Gray,
    }
}

/// Tone for a scam category. Unknown categories fall back to gray.
#[must_use]
pub fn scam_type_tone(scam_type: Option<&str>) -> Tone {
    match scam_type {
        Some("investment_scam") => Tone::Red,
        Some("phishing") => Tone::Orange,
        Some("romance_scam") => Tone::Pink,
        Some("lottery_scam") => Tone::Purple,
        _ => Tone::Gray,
    }
}

/// Tone for an account role.
#[must_use]
pub const fn role_tone(role: UserRole) -> Tone {
    match role {
        UserRole::Admin => Tone::Purple,
        UserRole::Moderator => Tone::Blue,
        UserRole::User => Tone::Gray,
    }
}

/// Tone for an account status.
#[must_use]
pub const fn user_status_tone(status: UserStatus) -> Tone {
    match status {
        UserStatus::Active => Tone::Green,
        UserStatus::Inactive => Tone::Gray,
        UserStatus::Suspended => Tone::Red,
        UserStatus::Pending => Tone::Yellow,
    }
}

/// Tone for a priority bucket.
#[must_use]
pub const fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::High => Tone::Red,
        Priority::Medium => Tone::Yellow,
        Priority::Low => Tone::Blue,
    }
}

/// Status badge text, uppercased the way report cards show it.
#[must_use]
pub fn status_label(status: &str) -> String {
    status.to_uppercase()
}

/// Truncate a description for card display: the first
/// [`DESCRIPTION_PREVIEW_CHARS`] characters plus an ellipsis when over the
/// cap, the text unchanged otherwise.
#[must_use]
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return text.to_string();
    }
    let mut preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tones() {
        assert_eq!(status_tone("open"), Tone::Red);
        assert_eq!(status_tone("closed"), Tone::Green);
        assert_eq!(status_tone("verified"), Tone::Gray);
    }

    #[test]
    fn test_scam_type_tones_fall_back_to_gray() {
        assert_eq!(scam_type_tone(Some("phishing")), Tone::Orange);
        assert_eq!(scam_type_tone(Some("weird_new_scam")), Tone::Gray);
        assert_eq!(scam_type_tone(None), Tone::Gray);
    }

    #[test]
    fn test_status_label_uppercases() {
        assert_eq!(status_label("in-progress"), "IN-PROGRESS");
    }

    #[test]
    fn test_truncate_description() {
        let short = "a short description";
        assert_eq!(truncate_description(short), short);

        let long = "x".repeat(250);
        let preview = truncate_description(&long);
        assert_eq!(preview.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));

        // Multi-byte text truncates on character boundaries.
        let swahili = "tahadhari ".repeat(30) + "ñ";
        let preview = truncate_description(&swahili);
        assert!(preview.ends_with("..."));
    }
}
