//! Seams between the worker proxy and what runs behind it.

pub mod packing_engine;
pub mod transport;

pub use packing_engine::PackingEngine;
pub use transport::WorkerTransport;
