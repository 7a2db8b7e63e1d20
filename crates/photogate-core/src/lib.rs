pub mod buffer;
pub mod checker;
pub mod config;
pub mod consts;
pub mod error;
pub mod grayscale;
pub mod io;
pub mod quality;
pub mod report;
