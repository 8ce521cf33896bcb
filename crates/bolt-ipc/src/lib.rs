//! Named messages the app pages send to the browser process.

use bolt_core::SessionId;

const MESSAGE_APP_CLOSED: &str = "__bolt_app_closed";
const MESSAGE_APP_SETTINGS: &str = "__bolt_app_settings";
const MESSAGE_APP_MINIFY: &str = "__bolt_app_minify";
const MESSAGE_APP_BEGIN_DRAG: &str = "__bolt_app_begin_drag";

/// Application messages understood by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMessage {
    /// The overlay close button was pressed; the window should close.
    Closed,
    /// The overlay settings button was pressed.
    Settings,
    /// The overlay minify button was pressed.
    Minify,
    /// The user started dragging the overlay handle.
    BeginDrag,
}

impl AppMessage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => MESSAGE_APP_CLOSED,
            Self::Settings => MESSAGE_APP_SETTINGS,
            Self::Minify => MESSAGE_APP_MINIFY,
            Self::BeginDrag => MESSAGE_APP_BEGIN_DRAG,
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value {
            MESSAGE_APP_CLOSED => Some(Self::Closed),
            MESSAGE_APP_SETTINGS => Some(Self::Settings),
            MESSAGE_APP_MINIFY => Some(Self::Minify),
            MESSAGE_APP_BEGIN_DRAG => Some(Self::BeginDrag),
            _ => None,
        }
    }
}

/// Inbound message as delivered by the host, before name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage<'a> {
    pub session: SessionId,
    pub name: &'a str,
    pub payload: Option<&'a [u8]>,
}

impl<'a> InboundMessage<'a> {
    pub fn new(session: SessionId, name: &'a str, payload: Option<&'a [u8]>) -> Self {
        Self {
            session,
            name,
            payload,
        }
    }

    /// Resolves the message name. Unknown names yield `None` so the host can
    /// offer the message to other handlers. The payload never affects resolution.
    pub fn resolve(&self) -> Option<AppMessage> {
        AppMessage::from_name(self.name)
    }

    pub fn payload_len(&self) -> usize {
        self.payload.map_or(0, <[u8]>::len)
    }
}

#[cfg(test)]
mod tests {
    use super::AppMessage;
    use super::InboundMessage;
    use bolt_core::SessionId;

    #[test]
    fn names_roundtrip() {
        for message in [
            AppMessage::Closed,
            AppMessage::Settings,
            AppMessage::Minify,
            AppMessage::BeginDrag,
        ] {
            assert_eq!(AppMessage::from_name(message.as_str()), Some(message));
        }
        assert_eq!(AppMessage::from_name("__bolt_app_unknown"), None);
        assert_eq!(AppMessage::from_name("__BOLT_APP_CLOSED"), None);
    }

    #[test]
    fn resolve_ignores_payload() {
        let message = InboundMessage::new(SessionId::new(1), "other_handler", None);
        assert_eq!(message.resolve(), None);
        assert_eq!(message.payload_len(), 0);

        let payload = b"{\"x\":1}".to_vec();
        let message = InboundMessage::new(
            SessionId::new(1),
            "__bolt_app_settings",
            Some(payload.as_slice()),
        );
        assert_eq!(message.resolve(), Some(AppMessage::Settings));
        assert_eq!(message.payload_len(), 7);
    }
}
