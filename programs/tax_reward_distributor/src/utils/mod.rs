pub mod math;
pub mod swap;
pub mod token;

pub use math::*;
pub use swap::*;
pub use token::*;
