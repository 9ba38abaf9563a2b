//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events
//! after successful domain mutations. Runtime adapters (desktop/web shells)
//! implement the sink to translate domain events into platform-specific
//! actions (re-rendering the settings header, refreshing roster views, etc.).

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
