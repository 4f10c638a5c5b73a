// src/ui/route_policy.rs

use portfolio_editor_lib::types::{EditMode, SessionStatus};

/// What the floating layers should show, derived once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayModel {
    pub show_edit_controls: bool,
    pub show_password_modal: bool,
    pub start_image_read: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageClearPolicy {
    Keep,
    ClearEditMessages,
    ClearPasswordPrompt,
}

/// Centralized overlay invariants (pure)
pub fn overlay_model(status: SessionStatus, image_picked: bool) -> OverlayModel {
    let editing = status.mode == EditMode::Editing;

    OverlayModel {
        // no password configured: the edit button is never rendered
        show_edit_controls: status.loaded && status.editing_enabled,
        show_password_modal: status.loaded && status.mode == EditMode::Authenticating,
        start_image_read: editing && image_picked,
    }
}

/// Message clearing policy (pure)
pub fn message_clear_policy(prev: EditMode, next: EditMode) -> MessageClearPolicy {
    match (prev, next) {
        (a, b) if a == b => MessageClearPolicy::Keep,
        (EditMode::Authenticating, _) => MessageClearPolicy::ClearPasswordPrompt,
        (EditMode::Editing, EditMode::Viewing) => MessageClearPolicy::Keep,
        _ => MessageClearPolicy::ClearEditMessages,
    }
}

pub fn leaving_editing(prev: EditMode, next: EditMode) -> bool {
    prev == EditMode::Editing && next != EditMode::Editing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(mode: EditMode, editing_enabled: bool) -> SessionStatus {
        SessionStatus {
            mode,
            authenticated: mode == EditMode::Editing,
            editing_enabled,
            loaded: true,
        }
    }

    #[test]
    fn edit_controls_hidden_without_password() {
        let m = overlay_model(status(EditMode::Viewing, false), false);
        assert!(!m.show_edit_controls);
        assert!(!m.show_password_modal);
    }

    #[test]
    fn modal_only_while_authenticating() {
        assert!(overlay_model(status(EditMode::Authenticating, true), false).show_password_modal);
        assert!(!overlay_model(status(EditMode::Editing, true), false).show_password_modal);
    }

    #[test]
    fn picked_image_is_read_only_while_editing() {
        assert!(!overlay_model(status(EditMode::Viewing, true), true).start_image_read);
        assert!(!overlay_model(status(EditMode::Authenticating, true), true).start_image_read);
        assert!(!overlay_model(status(EditMode::Editing, true), false).start_image_read);
        assert!(overlay_model(status(EditMode::Editing, true), true).start_image_read);
    }

    #[test]
    fn save_message_survives_leaving_edit_mode() {
        assert_eq!(
            message_clear_policy(EditMode::Editing, EditMode::Viewing),
            MessageClearPolicy::Keep
        );
        assert_eq!(
            message_clear_policy(EditMode::Authenticating, EditMode::Editing),
            MessageClearPolicy::ClearPasswordPrompt
        );
        assert_eq!(
            message_clear_policy(EditMode::Viewing, EditMode::Authenticating),
            MessageClearPolicy::ClearEditMessages
        );
        assert!(leaving_editing(EditMode::Editing, EditMode::Viewing));
        assert!(!leaving_editing(EditMode::Viewing, EditMode::Authenticating));
    }
}
