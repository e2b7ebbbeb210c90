pub mod generator;
pub mod geometry;
pub mod interaction;
pub mod metrics;
pub mod requests;
pub mod session;
