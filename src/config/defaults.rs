//! Default configuration values

/// Name of the settings file inside the config directory
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Largest matrix dimension `katas zigzag` prints unless configured otherwise
pub const MAX_ZIGZAG_DIMENSION: usize = 256;

/// Most numbers `expand_ranges` produces unless configured otherwise
pub const MAX_RANGE_VALUES: usize = 1_000_000;

/// Decimal places printed for compass azimuths
pub const COMPASS_PRECISION: usize = 2;

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
