mod analyze;
pub use analyze::Analyze;
