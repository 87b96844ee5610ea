use std::{ops::Deref, sync::Arc};

/// Identifier of one rocket's telemetry stream.
///
/// Scopes deduplication and becomes the subject of every event emitted for
/// that stream. Cheap to clone. Unlike an in-process handle, ids arrive over
/// the wire, so equality compares string content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ChannelId(Arc<str>);

impl ChannelId {
    pub fn new<S>(id: S) -> Self
    where
        S: Into<Arc<str>>,
    {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChannelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for ChannelId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
