//! Rendezvous relay for one-to-many WebRTC broadcasts.
//!
//! Broadcasters create rooms, viewers join them, and both sides exchange
//! opaque negotiation payloads through the server. Media never passes here.

mod config;
mod error;
mod room;
mod server;
mod signaling;
mod transport;

pub use config::ServerConfig;
pub use error::{RelayError, RelayResult};
pub use room::*;
pub use server::{AppState, BeaconServer};
pub use signaling::*;
pub use transport::*;
