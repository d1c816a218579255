pub mod inspection_handler;

pub use inspection_handler::{method_not_allowed, send_inspection};
