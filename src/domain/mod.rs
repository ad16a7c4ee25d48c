//! Pricing domain: validated inputs and the arithmetic that turns them into a
//! cost breakdown. Nothing in here performs I/O or holds state.

pub mod calculation;
pub mod inputs;
