pub mod report;
pub mod system;

pub use report::{present_catalog, present_check, present_label, present_options, present_update};
pub use system::{present_init, present_ticks};
