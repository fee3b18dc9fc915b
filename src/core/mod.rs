pub mod breakpoints;
pub mod constants;
pub mod state;
pub mod style;
pub mod trigger;

pub use breakpoints::*;
pub use state::*;
pub use style::*;
pub use trigger::*;
