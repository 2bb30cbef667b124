/// Trip duration labels
///
/// These are the only duration values accepted from clients. Free-form day
/// counts are rejected at the boundary.

/// A short getaway of one or two days.
pub const DURATION_ONE_TO_TWO_DAYS: &str = "1-2 days";

/// A long weekend or short break.
pub const DURATION_THREE_TO_FIVE_DAYS: &str = "3-5 days";

pub const DURATION_ONE_WEEK: &str = "1 week";

pub const DURATION_TWO_WEEKS: &str = "2 weeks";

pub const DURATION_THREE_WEEKS: &str = "3 weeks";

pub const DURATION_ONE_MONTH: &str = "1 month";

/// Destination keywords that mark a beach trip. Matched case-insensitively as
/// substrings, before the mountain keywords.
pub const BEACH_KEYWORDS: &[&str] = &["goa", "kerala", "andaman"];

/// Destination keywords that mark a mountain trip.
pub const MOUNTAIN_KEYWORDS: &[&str] = &["shimla", "manali", "kashmir"];

/// Major metro keywords. A destination naming one of these gets no flights
/// budget line.
pub const METRO_KEYWORDS: &[&str] = &[
    "mumbai",
    "delhi",
    "bangalore",
    "pune",
    "chennai",
    "kolkata",
    "hyderabad",
];
