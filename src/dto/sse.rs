use serde::Serialize;

#[derive(Clone, Debug)]
/// Payload ready to be written onto an SSE stream.
pub struct ServerEvent {
    /// SSE `event:` name; `None` sends an unnamed message.
    pub event: Option<String>,
    /// JSON body carried in the `data:` field.
    pub data: String,
}

impl ServerEvent {
    /// Serialise `payload` into the data field of a named event.
    pub fn json<T: Serialize>(event: &str, payload: &T) -> serde_json::Result<Self> {
        Ok(Self {
            event: Some(event.to_owned()),
            data: serde_json::to_string(payload)?,
        })
    }
}
