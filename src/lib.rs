pub mod cli;
pub mod config;
pub mod convert;
pub mod crop;
pub mod error;
pub mod icon;
pub mod mask;
pub mod preprocess;
pub mod round;
