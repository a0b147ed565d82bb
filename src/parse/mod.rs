pub mod types;
pub mod wrapper;

pub use types::ShellWrapper;
pub use wrapper::unwrap_shell;
