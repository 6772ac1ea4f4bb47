pub mod constants;
pub mod easing;
pub mod error;
pub mod menu_catalog;
pub mod menu_roulette;
pub mod random;
pub mod roulette_config;
pub mod roulette_session;
pub mod validation;
pub mod wheel_geometry;
pub mod wheel_layout;

pub use error::RouletteError;
pub use menu_catalog::MenuCategory;
pub use menu_roulette::{spin, SpinOutcome, SpinResult, WheelState};
pub use roulette_config::RouletteConfig;
pub use roulette_session::{run_spin, PendingSpin, RouletteSession, SpinTimer};
