/// Days in a calendar week
pub const DAYS_PER_WEEK: u32 = 7;

/// Months in a calendar year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Length of the "past week" preset, in days
pub const PAST_WEEK_DAYS: u32 = 7;
/// Length of the "past 4 weeks" preset, in days
pub const PAST_4_WEEKS_DAYS: u32 = 28;
/// Length of the "past 12 weeks" preset, in days
pub const PAST_12_WEEKS_DAYS: u32 = 84;
/// Length of the "past 6 months" preset, in calendar months
pub const PAST_6_MONTHS: u32 = 6;
/// Length of the "past 12 months" preset, in calendar months
pub const PAST_12_MONTHS: u32 = 12;

/// Largest gap (in days) echoed back as a count of days
pub const ECHO_DAYS_LIMIT: u64 = 31;
/// Largest gap (in days) echoed back as a count of weeks
pub const ECHO_WEEKS_LIMIT: u64 = 365;
/// Approximate month length used when echoing long gaps as months
pub const ECHO_DAYS_PER_MONTH: u64 = 30;

/// Highest weekday index (Saturday); weekdays are 0 = Sunday ..= 6 = Saturday
pub const MAX_WEEKDAY: u8 = 6;
/// Weekday index for Sunday
pub const SUNDAY: u8 = 0;
/// Weekday index for Monday
pub const MONDAY: u8 = 1;
/// Weekday index for Friday
pub const FRIDAY: u8 = 5;

/// English weekday names, indexed by weekday number (0 = Sunday)
pub const WEEKDAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// Date format used for parsing and printing range endpoints (ISO 8601)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
/// Human-readable date format ("Oct 5, 2026")
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";
/// Range separator (ISO 8601 interval format)
pub const RANGE_SEPARATOR: char = '/';
/// Separator between the two dates of a human-readable range
pub const DISPLAY_RANGE_SEPARATOR: &str = " - ";
