pub mod geometry;
#[cfg(feature = "gui")]
pub mod logger;
