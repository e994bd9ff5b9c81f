pub use crate::cli::{command::Command, console::Console, run_app, run_session};
pub use crate::domain::{
    contact::Contact,
    manager::{ContactManager, LoadStatus},
};
pub use crate::errors::AppError;
pub use crate::storage::{ContactStore, json::JsonStorage, memory::MemStorage, parse_store};
