// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

fn continued(duration: u32) -> Event {
    Event::new(0, 0)
        .lasting(duration)
        .with_state(EventState::Continued)
}

fn completed(duration: u32) -> Event {
    Event::new(0, 0).lasting(duration)
}

#[parameterized(
    all_completed = { StateFilter::All, completed(0), true },
    all_continued = { StateFilter::All, continued(10), true },
    completed_accepts_completed = { StateFilter::Completed, completed(5), true },
    completed_rejects_continued = { StateFilter::Completed, continued(5), false },
    continued_accepts_continued = { StateFilter::Continued, continued(0), true },
    continued_rejects_completed = { StateFilter::Continued, completed(0), false },
    zerodur_accepts_instant = { StateFilter::ZeroDur, continued(0), true },
    zerodur_rejects_duration = { StateFilter::ZeroDur, completed(1), false },
    nonzerodur_accepts_duration = { StateFilter::NonZeroDur, completed(1), true },
    nonzerodur_rejects_instant = { StateFilter::NonZeroDur, completed(0), false },
)]
fn filter_accepts(filter: StateFilter, event: Event, expected: bool) {
    assert_eq!(filter.accepts(&event), expected);
}

#[test]
fn filter_names_round_trip() {
    for filter in [
        StateFilter::All,
        StateFilter::Completed,
        StateFilter::Continued,
        StateFilter::ZeroDur,
        StateFilter::NonZeroDur,
    ] {
        assert_eq!(filter.to_string().parse::<StateFilter>(), Ok(filter));
    }
}

#[test]
fn unknown_filter_is_an_error() {
    let err = "Completed".parse::<StateFilter>().unwrap_err();
    assert_eq!(err.to_string(), "unknown state filter 'Completed'");
}

#[parameterized(
    plain_millis = { "1500", 1500 },
    zero = { "0", 0 },
    millis_suffix = { "250ms", 250 },
    seconds = { "2s", 2000 },
    compound = { "1m 30s", 90_000 },
)]
fn span_parses(input: &str, expected: u32) {
    assert_eq!(parse_span(input).unwrap(), expected);
}

#[test]
fn span_rejects_garbage() {
    assert!(matches!(parse_span("soon"), Err(SpanError::Invalid { .. })));
    assert!(matches!(parse_span(""), Err(SpanError::Invalid { .. })));
}

#[test]
fn span_rejects_overflow() {
    assert!(matches!(parse_span("99999999999"), Err(SpanError::TooLarge(_))));
    assert!(matches!(parse_span("100days"), Err(SpanError::TooLarge(_))));
}
