pub mod commands;
pub mod logger;
mod util;
