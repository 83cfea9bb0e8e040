pub mod edge;
pub mod error;
pub mod filter;
pub mod populator;
pub mod ports;
pub mod stats;
pub mod style;
