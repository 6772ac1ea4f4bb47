pub mod use_wheel_size;

pub use use_wheel_size::*;
