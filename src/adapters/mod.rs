// Adapters layer: concrete implementations for external systems (the SODA
// endpoint, the system clock, the terminal).

pub mod clock;
pub mod soda;
pub mod terminal;
