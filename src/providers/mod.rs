pub mod exchangerate;
pub mod goldapi;
