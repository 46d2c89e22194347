pub mod summary;

pub use summary::{generate_daily_summary, generate_summary};
