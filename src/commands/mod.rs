//! One module per CLI operation.

pub mod airgapped;
pub mod bundle;
pub mod offline;
pub mod online;
