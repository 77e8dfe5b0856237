// Adapters layer: concrete implementations of the domain ports.

pub mod clock;
pub mod memory_view;
pub mod payment;
pub mod session_store;

pub use clock::{FixedClock, SystemClock};
pub use memory_view::{MemoryView, ViewSnapshot};
pub use payment::SimulatedProcessor;
pub use session_store::MemorySessionStore;
