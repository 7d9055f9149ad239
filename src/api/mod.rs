//! Query surface for the mCORE schedule engine.
//!
//! A front end sends JSON [`ScheduleRequest`]s and receives tagged JSON
//! answers built from the resolvers in [`crate::schedule`].

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{handle_json, handle_request};
pub use request::ScheduleRequest;
pub use response::{
    AcronymList, ApiError, DayReport, ErrorBody, HolidayList, PayPeriodRow, PayPeriodTable,
    ScheduleResponse, YearView,
};
pub use state::AppState;
