pub mod account;
pub mod device;
