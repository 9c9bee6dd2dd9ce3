pub mod config;
pub mod constants;
pub mod decay;
pub mod geometry;
pub mod observable;
pub mod presentation;
pub mod pulse;
pub mod spring;
pub mod tracker;
pub mod widget;

pub use config::*;
pub use decay::decay;
pub use geometry::*;
pub use observable::Observable;
pub use presentation::*;
pub use pulse::EdgePulse;
pub use spring::{Spring, SpringParams};
pub use tracker::OverflowTracker;
pub use widget::*;
