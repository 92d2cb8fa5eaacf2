/// User id assumed by endpoints that accept an optional `user_id`.
pub const DEFAULT_USER_ID: i32 = 1;

/// Number of months in the spend-vs-budget series, current month included.
pub const SERIES_MONTHS: u32 = 6;

/// Look-back for the `last6Months` listing, counted from the first of the month.
pub const LAST_6_MONTHS_LOOKBACK_DAYS: i64 = 30 * 5;

/// Look-back for the `lastYear` listing, counted from the first of the month.
pub const LAST_YEAR_LOOKBACK_DAYS: i64 = 30 * 11;

/// How many rows the recent-expenses feed returns.
pub const RECENT_EXPENSES_LIMIT: i64 = 5;

/// Lifetime of a password recovery code.
pub const RECOVERY_CODE_TTL_MINUTES: i64 = 15;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;
