pub mod pointer;
pub mod scroll;

pub use pointer::PointerListener;
pub use scroll::ScrollListener;
