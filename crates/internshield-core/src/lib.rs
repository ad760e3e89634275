pub mod animation;
pub mod classify;
pub mod clock;
pub mod frames;
pub mod gauge;
pub mod types;

pub use animation::*;
pub use classify::*;
pub use clock::*;
pub use frames::*;
pub use gauge::*;
pub use types::*;
