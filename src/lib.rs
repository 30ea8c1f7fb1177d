pub mod config;
pub mod directory;
pub mod error;
pub mod interpreter;
pub mod redmine;
pub mod server;
pub mod tools;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use directory::DirectoryCache;
pub use error::CommandError;
pub use interpreter::CommandInterpreter;
pub use redmine::{RedmineClient, Tracker};
pub use server::RedmineChatServer;
