pub mod figure;
pub mod preset;

pub use figure::*;
pub use preset::*;
