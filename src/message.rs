use crate::{ChannelId, SeqNo};

/// A validated telemetry message.
///
/// Produced only by [`decode`](crate::decode). Carries the envelope metadata
/// the core needs plus the variant payload. `timestamp` is the raw
/// `messageTime` string, passed through untouched for the consumer's own
/// ordering logic.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub channel: ChannelId,
    pub sequence: SeqNo,
    pub timestamp: String,
    pub body: Body,
}

/// The five recognized message shapes, keyed by `messageType` on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Launched {
        rocket_type: String,
        launch_speed: f64,
        mission: String,
    },
    SpeedIncreased {
        by: f64,
    },
    SpeedDecreased {
        by: f64,
    },
    Exploded {
        reason: String,
    },
    MissionChanged {
        new_mission: String,
    },
}

impl Body {
    /// Outbound event type for this variant.
    ///
    /// One exhaustive match; adding a variant without extending the table
    /// is a compile error.
    pub fn event_type(&self) -> &'static str {
        match self {
            Body::Launched { .. } => "launched",
            Body::SpeedIncreased { .. } => "speed-increased",
            Body::SpeedDecreased { .. } => "speed-decreased",
            Body::Exploded { .. } => "exploded",
            Body::MissionChanged { .. } => "mission-changed",
        }
    }

    /// Wire tag (`metadata.messageType`) for this variant.
    pub fn wire_tag(&self) -> &'static str {
        match self {
            Body::Launched { .. } => "RocketLaunched",
            Body::SpeedIncreased { .. } => "RocketSpeedIncreased",
            Body::SpeedDecreased { .. } => "RocketSpeedDecreased",
            Body::Exploded { .. } => "RocketExploded",
            Body::MissionChanged { .. } => "RocketMissionChanged",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_table() {
        let launched = Body::Launched {
            rocket_type: "Falcon-9".into(),
            launch_speed: 500.0,
            mission: "ARTEMIS".into(),
        };
        assert_eq!(launched.event_type(), "launched");
        assert_eq!(Body::SpeedIncreased { by: 3000.0 }.event_type(), "speed-increased");
        assert_eq!(Body::SpeedDecreased { by: 2500.0 }.event_type(), "speed-decreased");
        assert_eq!(
            Body::Exploded { reason: "PRESSURE_VESSEL_FAILURE".into() }.event_type(),
            "exploded"
        );
        assert_eq!(
            Body::MissionChanged { new_mission: "SHUTTLE_MIR".into() }.event_type(),
            "mission-changed"
        );
    }

    #[test]
    fn test_wire_tags_round_trip_event_types() {
        let bodies = [
            Body::Launched {
                rocket_type: "Falcon-9".into(),
                launch_speed: 0.0,
                mission: "VOYAGER".into(),
            },
            Body::SpeedIncreased { by: 1.0 },
            Body::SpeedDecreased { by: 1.0 },
            Body::Exploded { reason: "unknown".into() },
            Body::MissionChanged { new_mission: "APOLLO".into() },
        ];
        for body in bodies {
            assert!(body.wire_tag().starts_with("Rocket"));
            assert!(!body.event_type().is_empty());
        }
    }
}
