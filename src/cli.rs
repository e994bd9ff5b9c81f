pub mod command;
pub mod console;
pub mod run;

pub use run::{run_app, run_session};
