pub mod client;
pub mod result;
pub mod transport;
pub mod validation;
