mod detail;
mod editor;
mod feed;
mod header;
mod panel;
mod record;
mod shell;

pub use shell::RootShell;
