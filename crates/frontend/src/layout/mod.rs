pub mod shell;

pub use shell::Shell;
