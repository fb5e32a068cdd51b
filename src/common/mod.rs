//! Common utility modules for shared functionality across the codebase.

pub mod clock;
pub mod path_key;
