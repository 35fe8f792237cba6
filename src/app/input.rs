//! Input event routing.
//!
//! Maps discrete host events onto [`Message`]s. The routing layer is the
//! only part of the engine that knows about toolbar attributes and
//! keyboard accelerators; everything downstream is host-agnostic.

use crate::app::Message;
use crate::format::FormatAction;

/// A discrete user action reported by the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Raw text-area input: the new full buffer text
    TextChanged(String),
    /// Selection change: char offsets, or `None` when nothing is selected
    SelectionChanged(Option<(usize, usize)>),
    /// Click on a toolbar button, carrying its declared operation name
    FormatButton(String),
    /// Click on the distinguished preview-toggle control
    ToggleButton,
    /// Global key-down, applied regardless of focus
    KeyDown { key: char, ctrl: bool, meta: bool },
}

/// The outcome of routing one input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routed {
    /// Message to dispatch, if the event maps to one.
    pub message: Option<Message>,
    /// Whether the host must suppress the platform's default handling
    /// (true only for the bold/italic accelerators).
    pub prevent_default: bool,
}

impl Routed {
    const fn message(message: Message) -> Self {
        Self {
            message: Some(message),
            prevent_default: false,
        }
    }

    const fn none() -> Self {
        Self {
            message: None,
            prevent_default: false,
        }
    }

    const fn accelerator(action: FormatAction) -> Self {
        Self {
            message: Some(Message::Apply(action)),
            prevent_default: true,
        }
    }
}

/// Map a host event to a message.
///
/// Unknown toolbar operation names route to no message (silent no-op, not
/// logged). The toggle control is a distinct variant, so it can never fall
/// into the formatting dispatch.
pub fn route_event(event: InputEvent) -> Routed {
    match event {
        InputEvent::TextChanged(text) => Routed::message(Message::SetText(text)),
        InputEvent::SelectionChanged(range) => Routed::message(Message::SetSelection(range)),
        InputEvent::FormatButton(name) => Routed {
            message: FormatAction::parse(&name).map(Message::Apply),
            prevent_default: false,
        },
        InputEvent::ToggleButton => Routed::message(Message::TogglePreview),
        InputEvent::KeyDown { key, ctrl, meta } if ctrl || meta => {
            match key.to_ascii_lowercase() {
                'b' => Routed::accelerator(FormatAction::Bold),
                'i' => Routed::accelerator(FormatAction::Italic),
                _ => Routed::none(),
            }
        }
        InputEvent::KeyDown { .. } => Routed::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_change_routes_to_set_text() {
        let routed = route_event(InputEvent::TextChanged("abc".to_string()));
        assert_eq!(routed.message, Some(Message::SetText("abc".to_string())));
        assert!(!routed.prevent_default);
    }

    #[test]
    fn test_format_button_routes_by_declared_name() {
        let routed = route_event(InputEvent::FormatButton("list-item".to_string()));
        assert_eq!(routed.message, Some(Message::Apply(FormatAction::ListItem)));
    }

    #[test]
    fn test_unknown_format_button_routes_to_nothing() {
        let routed = route_event(InputEvent::FormatButton("sparkle".to_string()));
        assert_eq!(routed.message, None);
        assert!(!routed.prevent_default);
    }

    #[test]
    fn test_toggle_button_never_reaches_format_dispatch() {
        let routed = route_event(InputEvent::ToggleButton);
        assert_eq!(routed.message, Some(Message::TogglePreview));
    }

    #[test]
    fn test_ctrl_b_is_the_bold_accelerator() {
        let routed = route_event(InputEvent::KeyDown {
            key: 'b',
            ctrl: true,
            meta: false,
        });
        assert_eq!(routed.message, Some(Message::Apply(FormatAction::Bold)));
        assert!(routed.prevent_default);
    }

    #[test]
    fn test_meta_i_is_the_italic_accelerator_case_insensitive() {
        let routed = route_event(InputEvent::KeyDown {
            key: 'I',
            ctrl: false,
            meta: true,
        });
        assert_eq!(routed.message, Some(Message::Apply(FormatAction::Italic)));
        assert!(routed.prevent_default);
    }

    #[test]
    fn test_plain_keystrokes_are_not_accelerators() {
        let routed = route_event(InputEvent::KeyDown {
            key: 'b',
            ctrl: false,
            meta: false,
        });
        assert_eq!(routed.message, None);
        assert!(!routed.prevent_default);
    }

    #[test]
    fn test_modified_non_accelerator_key_is_left_to_the_platform() {
        let routed = route_event(InputEvent::KeyDown {
            key: 's',
            ctrl: true,
            meta: false,
        });
        assert_eq!(routed.message, None);
        assert!(!routed.prevent_default);
    }
}
