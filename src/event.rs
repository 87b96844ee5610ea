use serde_json::{Value, json};

use crate::{Body, ChannelId, Message};

/// Topic every rocket event is published under.
pub const ROCKET_TOPIC: &str = "rocket";

/// A domain event ready for the bus.
///
/// One is produced per accepted, non-duplicate [`Message`]. The payload
/// carries the variant's fields at the top level plus a `meta` block with
/// the originating sequence number and timestamp, so consumers can apply
/// their own ordering without another lookup.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RocketEvent {
    pub topic: &'static str,
    pub event_type: &'static str,
    pub subject: ChannelId,
    pub payload: Value,
}

impl From<&Message> for RocketEvent {
    fn from(msg: &Message) -> Self {
        let mut payload = match &msg.body {
            Body::Launched {
                rocket_type,
                launch_speed,
                mission,
            } => json!({
                "type": rocket_type,
                "launchSpeed": launch_speed,
                "mission": mission,
            }),
            Body::SpeedIncreased { by } => json!({ "by": by }),
            Body::SpeedDecreased { by } => json!({ "by": by }),
            Body::Exploded { reason } => json!({ "reason": reason }),
            Body::MissionChanged { new_mission } => json!({ "newMission": new_mission }),
        };
        payload["meta"] = json!({
            "sequence": msg.sequence.value(),
            "timestamp": msg.timestamp,
        });

        RocketEvent {
            topic: ROCKET_TOPIC,
            event_type: msg.body.event_type(),
            subject: msg.channel.clone(),
            payload,
        }
    }
}
