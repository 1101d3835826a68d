pub mod error;
pub mod logger;
pub mod paths;
pub mod validation;
