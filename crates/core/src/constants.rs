/// Trailing window for the smoothed-volume moving average, in trading days.
pub const DEFAULT_VOLUME_WINDOW: usize = 20;

/// Trailing window for the long price moving average, in trading days.
pub const DEFAULT_SMA_WINDOW: usize = 200;

/// Ceiling applied to ROA before it enters the business-value term.
pub const ROA_CAP: f64 = 0.3;

/// Multiplier scaling the earnings term of the business value.
pub const BUSINESS_VALUE_MULTIPLIER: f64 = 150.0;

/// Offset added to the equity-to-asset ratio before the leverage clamp.
pub const LEVERAGE_OFFSET: f64 = 0.33;

/// Lower clamp bound for the leverage-adjustment denominator.
pub const LEVERAGE_LOWER_BOUND: f64 = 0.66;

/// Upper clamp bound for the leverage-adjustment denominator.
pub const LEVERAGE_UPPER_BOUND: f64 = 1.0;

/// Upper-limit multiple applied to the theoretical price.
pub const THEORETICAL_PRICE_UPPER_MULTIPLE: f64 = 2.0;
