pub mod convert;
pub mod discovery;
pub mod executor;
pub mod planner;
pub mod render;
pub mod validator;
