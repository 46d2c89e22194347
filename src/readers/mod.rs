pub mod readings_reader;

pub use readings_reader::ReadingsReader;
