pub mod account;
pub mod device;

pub use account::{
    Account, ApiMessage, ForgotPasswordRequest, LoginRequest, RegisterRequest, RegisterResponse,
    ResetPasswordRequest,
};
pub use device::{DeviceView, MeasurementPoint};
