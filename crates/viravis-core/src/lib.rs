pub mod client;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod surface;

pub use client::{ChartClient, PollTicket, TickOutcome};
pub use config::{ClientConfig, PollPolicy};
pub use error::{ConfigError, PollError};
pub use layout::{BarRect, Viewport, bar_layout};
pub use model::{Payload, Series, decode_body};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
