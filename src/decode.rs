use serde_json::{Map, Value};

use crate::{Body, ChannelId, Error, Message, Result, SeqNo};

/// Decode an untyped request body into a validated [`Message`].
///
/// Pure function of its input. Checks run in a fixed order and the first
/// violated rule wins, so rejection reasons are deterministic: envelope
/// shape, then metadata fields, then the payload fields of the resolved
/// variant. Extraneous input fields are dropped, not errors.
pub fn decode(input: &Value) -> Result<Message> {
    let root = input
        .as_object()
        .ok_or_else(|| Error::invalid("body must be a JSON object"))?;
    let metadata = root
        .get("metadata")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::invalid("metadata must be an object"))?;
    let message = root
        .get("message")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::invalid("message must be an object"))?;

    let channel = non_empty_str(metadata, "metadata.channel")?;
    let sequence = number(metadata, "metadata.messageNumber")?;
    let timestamp = non_empty_str(metadata, "metadata.messageTime")?;
    let tag = non_empty_str(metadata, "metadata.messageType")?;

    let body = match tag.as_str() {
        "RocketLaunched" => Body::Launched {
            rocket_type: str_field(message, "message.type")?,
            launch_speed: non_negative(message, "message.launchSpeed")?,
            mission: str_field(message, "message.mission")?,
        },
        "RocketSpeedIncreased" => Body::SpeedIncreased {
            by: non_negative(message, "message.by")?,
        },
        "RocketSpeedDecreased" => Body::SpeedDecreased {
            by: non_negative(message, "message.by")?,
        },
        "RocketExploded" => Body::Exploded {
            reason: str_field(message, "message.reason")?,
        },
        "RocketMissionChanged" => Body::MissionChanged {
            new_mission: str_field(message, "message.newMission")?,
        },
        other => return Err(Error::UnknownMessageType(other.to_string())),
    };

    Ok(Message {
        channel: ChannelId::new(channel),
        sequence: SeqNo::new(sequence),
        timestamp,
        body,
    })
}

// `path` is the dotted location used in error text; the lookup key is its
// last segment.
fn field<'a>(obj: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let key = path.rsplit('.').next().unwrap_or(path);
    obj.get(key)
}

fn non_empty_str(obj: &Map<String, Value>, path: &str) -> Result<String> {
    match field(obj, path).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_owned()),
        _ => Err(Error::invalid(format!("{path} must be a non-empty string"))),
    }
}

fn str_field(obj: &Map<String, Value>, path: &str) -> Result<String> {
    field(obj, path)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| Error::invalid(format!("{path} must be a string")))
}

fn number(obj: &Map<String, Value>, path: &str) -> Result<f64> {
    field(obj, path)
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::invalid(format!("{path} must be a number")))
}

fn non_negative(obj: &Map<String, Value>, path: &str) -> Result<f64> {
    let n = number(obj, path)?;
    if n < 0.0 {
        return Err(Error::invalid(format!("{path} must be non-negative")));
    }
    Ok(n)
}
