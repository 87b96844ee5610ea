//! Rocket telemetry ingress core.
//!
//! Decodes untyped JSON envelopes into typed telemetry messages,
//! deduplicates them by (channel, sequence number) and republishes each
//! accepted message as exactly one domain event through a [`Publisher`].
//!
//! The HTTP server and the event-bus transport live outside this crate:
//! the HTTP layer calls [`Ingress::accept`] with the deserialized request
//! body, and the bus transport implements [`Publisher`].

mod channel_id;
mod decode;
mod dispatcher;
mod error;
mod event;
mod ingress;
mod ledger;
mod message;
mod publisher;
mod seq_no;

pub mod testing;

pub use channel_id::ChannelId;
pub use decode::decode;
pub use dispatcher::{Dispatcher, Outcome};
pub use error::Error;
pub use event::{ROCKET_TOPIC, RocketEvent};
pub use ingress::Ingress;
pub use ledger::{MemoryLedger, SeenStore};
pub use message::{Body, Message};
pub use publisher::Publisher;
pub use seq_no::SeqNo;

pub type Result<T = ()> = std::result::Result<T, Error>;
