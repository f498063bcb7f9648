mod http_api;
mod membership_notifier;
mod router;
mod signaling_output;
mod ws_handler;

pub use http_api::*;
pub use membership_notifier::*;
pub use router::*;
pub use signaling_output::*;
pub use ws_handler::*;
