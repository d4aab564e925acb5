pub mod summary;

pub use summary::DEFAULT_YEARS;
