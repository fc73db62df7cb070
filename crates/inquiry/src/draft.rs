use crate::types::{InquiryTarget, TargetKind};

/// Soft guidance displayed next to the message field. Deliberately not
/// consulted by `validate`; whether it should become a hard rule is an open
/// product question.
pub const MIN_MESSAGE_HINT: usize = 20;

/// The in-progress inquiry form state. Owned exclusively by the active modal
/// instance; discarded when the modal closes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryDraft {
    pub sender_name: String,
    pub sender_email: String,
    pub sender_phone: String,
    pub subject: String,
    pub message: String,
}

impl InquiryDraft {
    /// Fresh draft with subject and message pre-filled from the target's
    /// display name, per supply category.
    pub fn seeded(target: &InquiryTarget) -> Self {
        let (subject, message) = match target.kind {
            TargetKind::Equipment => (
                format!("Inquiry about \"{}\"", target.display_name),
                format!(
                    "Hi, I'm interested in renting \"{}\". Please let me know the availability and booking process.",
                    target.display_name
                ),
            ),
            TargetKind::Manpower => (
                format!("Work inquiry for {}", target.display_name),
                format!(
                    "Hi {}, I came across your profile and would like to discuss a job. Are you currently available for new work?",
                    target.display_name
                ),
            ),
        };

        Self {
            subject,
            message,
            ..Self::default()
        }
    }

    /// Reset every field to empty. Used on close so a stale message never
    /// leaks into a subsequent open.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipment_seed_interpolates_display_name() {
        let target = InquiryTarget::new(TargetKind::Equipment, "42", "Excavator X");
        let draft = InquiryDraft::seeded(&target);

        assert!(draft.message.contains("Excavator X"));
        assert!(draft.subject.contains("Excavator X"));
        assert!(draft.sender_name.is_empty());
        assert!(draft.sender_email.is_empty());
    }

    #[test]
    fn manpower_seed_interpolates_display_name() {
        let target = InquiryTarget::new(TargetKind::Manpower, "7", "Ade the Welder");
        let draft = InquiryDraft::seeded(&target);

        assert!(draft.message.contains("Ade the Welder"));
        assert!(draft.subject.contains("Ade the Welder"));
    }

    #[test]
    fn clear_resets_to_empty_not_reseeded() {
        let target = InquiryTarget::new(TargetKind::Equipment, "42", "Excavator X");
        let mut draft = InquiryDraft::seeded(&target);
        draft.sender_name = "Jane".to_string();

        draft.clear();

        assert_eq!(draft, InquiryDraft::default());
    }
}
