pub mod sample_reader;
