//! Request handlers for the schedule query surface.
//!
//! This module answers [`ScheduleRequest`]s against the shared [`AppState`].

use std::time::Instant;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::schedule::{
    ScheduleContext, carriers_off, holidays_observed_in_year, is_carrier_day_off, is_holiday,
    label_for_date, letter_carrier, letter_label_for_date, month_view, pay_period_info,
    pay_periods_for_year, work_week_number, year_view,
};

use super::request::ScheduleRequest;
use super::response::{
    AcronymList, ApiError, DayReport, ErrorBody, HolidayList, PayPeriodRow, PayPeriodTable,
    ScheduleResponse, YearView,
};
use super::state::AppState;

/// Answers a decoded request.
///
/// # Errors
///
/// Returns [`EngineError::InvalidQuery`] when the request names a month or
/// year that cannot be represented.
///
/// # Example
///
/// ```
/// use mcore_engine::api::{AppState, ScheduleRequest, ScheduleResponse, handle_request};
/// use mcore_engine::config::{ConfigLoader, ScheduleConfig};
/// use chrono::NaiveDate;
///
/// let state = AppState::new(ConfigLoader::from_config(ScheduleConfig::standard()));
/// let request = ScheduleRequest::PayPeriod { date: NaiveDate::from_ymd_opt(2024, 12, 14).unwrap() };
///
/// match handle_request(&state, request)? {
///     ScheduleResponse::PayPeriod(period) => assert_eq!(period.label(), "2025-01"),
///     other => panic!("unexpected response {:?}", other),
/// }
/// # Ok::<(), mcore_engine::error::EngineError>(())
/// ```
pub fn handle_request(state: &AppState, request: ScheduleRequest) -> EngineResult<ScheduleResponse> {
    match request {
        ScheduleRequest::Day { date, carrier } => Ok(ScheduleResponse::Day(describe_day(
            state,
            date,
            carrier.as_deref(),
        ))),
        ScheduleRequest::PayPeriod { date } => Ok(ScheduleResponse::PayPeriod(pay_period_info(
            date,
            state.config().anchors(),
        ))),
        ScheduleRequest::PayPeriodTable { year, today } => {
            pay_period_table(state, year, today).map(ScheduleResponse::PayPeriodTable)
        }
        ScheduleRequest::Holidays { year } => {
            check_year(year)?;
            let holidays = holidays_observed_in_year(state.config().holidays(), year)
                .into_iter()
                .map(Into::into)
                .collect();
            Ok(ScheduleResponse::Holidays(HolidayList { year, holidays }))
        }
        ScheduleRequest::Month { year, month, today } => {
            let ctx = context(state, today);
            month_view(year, month, &ctx)
                .map(ScheduleResponse::Month)
                .ok_or_else(|| EngineError::InvalidQuery {
                    message: format!("no calendar month {} in year {}", month, year),
                })
        }
        ScheduleRequest::Year { year, today } => {
            check_year(year)?;
            let ctx = context(state, today);
            Ok(ScheduleResponse::Year(YearView {
                year,
                months: year_view(year, &ctx),
            }))
        }
        ScheduleRequest::Acronyms { term, order } => {
            let results = state
                .config()
                .acronyms()
                .search(&term, order)
                .into_iter()
                .cloned()
                .collect();
            Ok(ScheduleResponse::Acronyms(AcronymList {
                term,
                order,
                results,
            }))
        }
    }
}

/// Decodes a JSON request, answers it and encodes the answer.
///
/// Never fails: malformed input and unanswerable requests produce an
/// `{"error": {...}}` body carrying an [`ApiError`].
pub fn handle_json(state: &AppState, body: &str) -> String {
    let correlation_id = Uuid::new_v4();

    let request = match serde_json::from_str::<ScheduleRequest>(body) {
        Ok(request) => request,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected schedule request");
            let message = err.to_string();
            let error = if message.contains("missing field") || message.contains("unknown variant")
            {
                ApiError::validation_error(message)
            } else {
                ApiError::malformed_json(message)
            };
            return encode(&ErrorBody { error });
        }
    };

    let kind = request.kind();
    info!(correlation_id = %correlation_id, kind, "Processing schedule request");

    let start_time = Instant::now();
    match handle_request(state, request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                kind,
                duration_us = start_time.elapsed().as_micros(),
                "Schedule request completed"
            );
            encode(&response)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, kind, error = %err, "Schedule request failed");
            encode(&ErrorBody { error: err.into() })
        }
    }
}

fn encode<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        warn!(error = %err, "Failed to encode response");
        r#"{"error":{"code":"INTERNAL_ERROR","message":"Failed to encode response"}}"#.to_string()
    })
}

fn context(state: &AppState, today: Option<NaiveDate>) -> ScheduleContext<'_> {
    let ctx = ScheduleContext::new(state.config(), state.settings());
    match today {
        Some(today) => ctx.with_today(today),
        None => ctx,
    }
}

fn check_year(year: i32) -> EngineResult<()> {
    if NaiveDate::from_ymd_opt(year, 1, 1).is_none() || NaiveDate::from_ymd_opt(year, 12, 31).is_none() {
        return Err(EngineError::InvalidQuery {
            message: format!("year {} is outside the supported range", year),
        });
    }
    Ok(())
}

fn describe_day(state: &AppState, date: NaiveDate, carrier: Option<&str>) -> DayReport {
    let config = state.config();
    let settings = state.settings();
    let anchors = config.anchors();

    let carrier_id = carrier.or(settings.selected_carrier.as_deref());
    let checked = carrier_id.and_then(|id| config.carriers().get(id));

    DayReport {
        date,
        weekday: date.weekday(),
        work_week: work_week_number(date, anchors),
        pay_period: pay_period_info(date, anchors),
        holiday: is_holiday(config.holidays(), date),
        carriers_off: carriers_off(date, config.carriers(), anchors)
            .into_iter()
            .map(|c| c.id.clone())
            .collect(),
        carrier: checked.map(|c| c.id.clone()),
        is_day_off: is_carrier_day_off(date, checked, anchors),
        route_label: label_for_date(
            date,
            config.rotation(),
            &settings.t6_routes,
            settings.label_policy,
            anchors,
        ),
        letter_label: letter_label_for_date(
            date,
            &settings.letter_routes,
            settings.label_policy,
            anchors,
        ),
        letter_carrier: letter_carrier(date, config.carriers(), anchors).map(|c| c.id.clone()),
    }
}

fn pay_period_table(
    state: &AppState,
    year: i32,
    today: Option<NaiveDate>,
) -> EngineResult<PayPeriodTable> {
    check_year(year)?;

    let periods = pay_periods_for_year(year, state.config().anchors())
        .into_iter()
        .map(|period| PayPeriodRow {
            label: period.label(),
            period,
            is_current: today.is_some_and(|today| period.contains_date(today)),
        })
        .collect();

    Ok(PayPeriodTable { year, periods })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigLoader, ScheduleConfig};
    use crate::models::{Acronym, AcronymTable, SortOrder, UserSettings};
    use serde_json::Value;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state() -> AppState {
        AppState::new(ConfigLoader::from_config(ScheduleConfig::standard()))
    }

    #[test]
    fn test_day_request_for_holiday() {
        let response = handle_request(
            &state(),
            ScheduleRequest::Day {
                date: date(2025, 7, 4),
                carrier: None,
            },
        )
        .unwrap();

        let ScheduleResponse::Day(report) = response else {
            panic!("expected a day report");
        };
        assert_eq!(report.holiday.unwrap().name, "Independence Day");
        assert_eq!(report.carriers_off.len(), 1);
        assert!(report.carrier.is_none());
        assert!(!report.is_day_off);
        assert_eq!(report.pay_period.number, 15);
        assert_eq!(report.letter_carrier.as_ref(), report.carriers_off.first());
    }

    #[test]
    fn test_day_request_with_carrier_override() {
        let state = state().with_settings(UserSettings {
            selected_carrier: Some("yellow".to_string()),
            ..UserSettings::default()
        });

        let ScheduleResponse::Day(selected) = handle_request(
            &state,
            ScheduleRequest::Day {
                date: date(2025, 1, 6),
                carrier: None,
            },
        )
        .unwrap() else {
            panic!("expected a day report");
        };
        assert_eq!(selected.carrier.as_deref(), Some("yellow"));
        assert!(!selected.is_day_off);

        let ScheduleResponse::Day(overridden) = handle_request(
            &state,
            ScheduleRequest::Day {
                date: date(2025, 1, 6),
                carrier: Some("BLACK".to_string()),
            },
        )
        .unwrap() else {
            panic!("expected a day report");
        };
        assert_eq!(overridden.carrier.as_deref(), Some("black"));
        assert!(overridden.is_day_off);
        assert_eq!(overridden.work_week, 1);
        assert_eq!(overridden.letter_carrier.as_deref(), Some("black"));
    }

    #[test]
    fn test_pay_period_table_marks_current() {
        let response = handle_request(
            &state(),
            ScheduleRequest::PayPeriodTable {
                year: 2025,
                today: Some(date(2025, 3, 1)),
            },
        )
        .unwrap();

        let ScheduleResponse::PayPeriodTable(table) = response else {
            panic!("expected a pay period table");
        };
        let current: Vec<&PayPeriodRow> = table.periods.iter().filter(|r| r.is_current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].label, "2025-06");
    }

    #[test]
    fn test_invalid_month_is_invalid_query() {
        let result = handle_request(
            &state(),
            ScheduleRequest::Month {
                year: 2025,
                month: 13,
                today: None,
            },
        );
        assert!(matches!(result, Err(EngineError::InvalidQuery { .. })));
    }

    #[test]
    fn test_year_out_of_range_is_invalid_query() {
        let result = handle_request(
            &state(),
            ScheduleRequest::Holidays { year: i32::MAX },
        );
        assert!(matches!(result, Err(EngineError::InvalidQuery { .. })));
    }

    #[test]
    fn test_acronym_search() {
        let config = ScheduleConfig::new(
            Default::default(),
            Default::default(),
            Default::default(),
            Default::default(),
            AcronymTable::new(vec![
                Acronym {
                    acronym: "PTF".to_string(),
                    meaning: "Part-Time Flexible".to_string(),
                },
                Acronym {
                    acronym: "CCA".to_string(),
                    meaning: "City Carrier Assistant".to_string(),
                },
            ]),
        );
        let state = AppState::new(ConfigLoader::from_config(config));

        let ScheduleResponse::Acronyms(list) = handle_request(
            &state,
            ScheduleRequest::Acronyms {
                term: String::new(),
                order: SortOrder::Descending,
            },
        )
        .unwrap() else {
            panic!("expected acronyms");
        };
        let names: Vec<&str> = list.results.iter().map(|a| a.acronym.as_str()).collect();
        assert_eq!(names, vec!["PTF", "CCA"]);
    }

    #[test]
    fn test_handle_json_success() {
        let body = handle_json(&state(), r#"{"kind": "pay_period", "date": "2024-12-14"}"#);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["kind"], "pay_period");
        assert_eq!(value["year"], 2025);
        assert_eq!(value["pay_date"], "2025-01-03");
    }

    #[test]
    fn test_handle_json_malformed() {
        let body = handle_json(&state(), "{not json");
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["error"]["code"], "MALFORMED_JSON");
    }

    #[test]
    fn test_handle_json_missing_field() {
        let body = handle_json(&state(), r#"{"kind": "month", "year": 2025}"#);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
    }

    #[test]
    fn test_handle_json_invalid_query() {
        let body = handle_json(&state(), r#"{"kind": "month", "year": 2025, "month": 0}"#);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["error"]["code"], "INVALID_QUERY");
    }

    #[test]
    fn test_pay_period_table_at_last_supported_year() {
        let year = NaiveDate::MAX.year();
        let body = handle_json(
            &state(),
            &format!(r#"{{"kind": "pay_period_table", "year": {}}}"#, year),
        );
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["kind"], "pay_period_table");

        let periods = value["periods"].as_array().unwrap();
        assert!(!periods.is_empty());
        let end_date: NaiveDate =
            serde_json::from_value(periods.last().unwrap()["end_date"].clone()).unwrap();
        assert_eq!(end_date, NaiveDate::MAX);
    }
}
