mod context;

pub mod catalog;
pub mod check;
pub mod init;
pub mod label;
pub mod options;
pub mod ticks;
pub mod update;

pub use context::HandlerContext;
