//! The background computation boundary.
//!
//! The controller talks to a [`WorkerProxy`], which frames commands for a
//! [`WorkerTransport`]. Behind the transport a [`WorkerHost`] feeds a
//! [`PackingEngine`], either on its own thread ([`ThreadedTransport`]) or
//! synchronously on the caller's ([`InlineTransport`]).

pub mod errors;
pub mod host;
pub mod inline;
pub mod ports;
pub mod proxy;
pub mod threaded;

pub use errors::WorkerError;
pub use host::WorkerHost;
pub use inline::InlineTransport;
pub use ports::{PackingEngine, WorkerTransport};
pub use proxy::WorkerProxy;
pub use threaded::ThreadedTransport;
