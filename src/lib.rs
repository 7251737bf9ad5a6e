pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod report;
pub mod schedule;
pub mod sources;
pub mod types;

// re-export key types
pub use config::PlannerConfig;
pub use decimal::{Money, Rate};
pub use errors::{PlannerError, Result};
pub use interest::calculate_interest;
pub use calendar::{CalendarRenderer, PlainCalendar};
pub use schedule::{
    create_payment_schedule, CardPayment, MonthRecord, PaymentSchedule, ScheduleOutcome,
    MAX_SCHEDULE_MONTHS,
};
pub use types::CreditCard;

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
