//! Application use cases for the recording controller.

pub mod compute_layout;
pub mod control_loop;
pub mod manage_session;
