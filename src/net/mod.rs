//! Network layer: wire DTOs, REST helpers, the channel socket, the session
//! service, and the moderation controller.

pub mod api;
pub mod channel;
pub mod moderation;
pub mod session;
pub mod types;
