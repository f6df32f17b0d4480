pub mod toggle_source;
