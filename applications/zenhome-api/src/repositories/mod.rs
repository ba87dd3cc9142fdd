pub mod accounts;
pub mod devices;

pub use accounts::AccountRepository;
pub use devices::DeviceRepository;
