pub mod config;
pub mod drivers;
pub mod export;
pub mod fetch;
pub mod groups;
pub mod init;
mod live;
pub mod report;
