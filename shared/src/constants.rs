pub const SPIN_DURATION_MS: u32 = 4000;
pub const MIN_EXTRA_TURNS: u32 = 5;
pub const MAX_EXTRA_TURNS: u32 = 7;

pub const FULL_TURN_DEGREES: f64 = 360.0;
// 1/4096 of a degree. Keeps accumulated rotations exact in f64.
pub const STOP_ANGLE_RESOLUTION: f64 = 4096.0;

pub const LABEL_RADIUS_RATIO: f64 = 0.66;

pub const SEGMENT_COLORS: [&str; 8] = [
    "#F87171", "#FB923C", "#FBBF24", "#34D399",
    "#60A5FA", "#A78BFA", "#F472B6", "#38BDF8",
];

pub const EASE_SPIN: (f64, f64, f64, f64) = (0.17, 0.67, 0.12, 0.99);

pub const CATEGORY_IN_PROGRESS_ERROR: &str = "Cannot change category while the wheel is spinning";
pub const CONCURRENT_SPIN_ERROR: &str = "A spin is already in progress";
pub const EMPTY_CATEGORY_ERROR: &str = "Category has no menu items";
