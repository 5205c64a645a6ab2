pub mod constants;
pub mod observable;
pub mod pointer;
pub mod projects;
pub mod scroll;
pub mod spring;

pub use constants::*;
pub use observable::{Observable, Subscription};
pub use pointer::PointerTracker;
pub use projects::*;
pub use scroll::*;
pub use spring::*;
