//! Application layer: the trigger-key use case.

pub mod trigger_key;
