pub mod lcg;
pub mod service;
pub mod source;
pub mod synthetic;
