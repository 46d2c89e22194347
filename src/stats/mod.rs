pub mod descriptive;

pub use descriptive::{find_max, find_min, mean, Extremum};
