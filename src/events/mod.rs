pub mod pointer;
pub mod resize;
pub mod scroll;

pub use pointer::wire_mousemove;
pub use resize::wire_resize;
pub use scroll::{wire_scroll, ScrollSync};
