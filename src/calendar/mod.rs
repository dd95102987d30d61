//! Calendar concerns: timezone-stable day boundaries, Easter computation,
//! and the holiday calendar service.

mod clock;
mod easter;
mod holidays;

pub use clock::{CalendarClock, DateInput, REFERENCE_TIMEZONE};
pub use easter::easter_sunday;
pub use holidays::{HolidayCalendar, SeedOutcome, SeedReport};
