//! Application layer holding the stateful cost engine.
//!
//! `CostEngine` owns the inputs of one calculation, funnels every entry point
//! through a single validated request, and renders its reports through the
//! interface layer.

pub mod engine;
