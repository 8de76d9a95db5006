//! Ports module for Checkpoints subsystem

pub mod inbound;
pub mod outbound;

pub use inbound::CheckpointApi;
pub use outbound::TxtRecordResolver;
