//! Application-wide constants

pub const DEFAULT_DATABASE_URL: &str = "sqlite://landlord.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";
pub const LOG_FILE_PREFIX: &str = "landlord.log";

/// Window used by the lease expiration report.
pub const LEASE_EXPIRY_WINDOW_MONTHS: u32 = 3;
/// Window used by the income and expense trend reports.
pub const REPORT_TREND_MONTHS: u32 = 12;
/// Number of rows shown in dashboard "recent" lists.
pub const DASHBOARD_RECENT_LIMIT: i64 = 5;
