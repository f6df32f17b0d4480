pub mod capture;
pub mod pump;
