use serde::{Deserialize, Serialize};

/// Classification of a notification, selecting its visual template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Warning,
    Error,
    #[default]
    Default,
}

impl Severity {
    pub const ALL: [Severity; 4] =
        [Severity::Success, Severity::Warning, Severity::Error, Severity::Default];

    /// Wire tokens as the site emits them in the `status` field. Anything
    /// unrecognized (including the empty string) is `Default`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "successful" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Default,
        }
    }

    /// Class name keying the severity's template fragment in the registry.
    pub fn class_name(self) -> &'static str {
        match self {
            Severity::Success => "successful",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Default => "default",
        }
    }
}

/// Value object carried by a notify event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationPayload {
    pub message: String,
    pub severity: Severity,
}

/// Wire form of the notify payload: `{"message": "...", "status": "..."}`,
/// with `status` optional.
#[derive(Serialize, Deserialize)]
struct WirePayload {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
}

impl NotificationPayload {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self { message: message.into(), severity }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let wire: WirePayload = serde_json::from_str(raw)?;
        Ok(Self {
            message: wire.message,
            severity: wire.status.as_deref().map(Severity::from_token).unwrap_or_default(),
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&WirePayload {
            message: self.message.clone(),
            status: Some(self.severity.class_name().to_string()),
        })
    }
}
