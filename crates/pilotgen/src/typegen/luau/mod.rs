//! Luau declaration emitter.
//!
//! Part types render as table type literals:
//!
//! ```text
//! type Wheel = {
//!     Configure: (self: Wheel, properties: {Radius: number?}) -> (),
//!     Radius: number,
//!     Connect: ((self: Wheel, event: "Ready", callback: () -> ()) -> EventConnection)
//! }
//! ```
//!
//! Port lookup globals render as overload sets joined by `&`.

mod emitter;
mod globals;


pub use emitter::Emitter;
pub use globals::{PortLookup, emit_port_globals};
