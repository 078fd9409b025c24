//! English end-to-end extraction scenarios.

use chronotag::{Extraction, Language, QueryTag, TimeResult, extract_with};

const BASE: &str = "2025-01-21T08:00:00Z";

fn run(text: &str) -> Extraction {
    extract_with(text, BASE, Language::English).unwrap()
}

fn instant(s: &str) -> TimeResult {
    TimeResult::Instant(s.to_string())
}

fn interval(start: &str, end: &str) -> TimeResult {
    TimeResult::Interval(start.to_string(), end.to_string())
}

#[test]
fn day_after_tomorrow_with_clock() {
    let out = run("the day after tomorrow 5pm");
    assert_eq!(out.results, vec![instant("2025-01-23T17:00:00Z")]);
    assert_eq!(out.query_tag, QueryTag::Relative);
}

#[test]
fn between_clocks_anchored_on_weekday() {
    let out = run("between 9:30 and 11:00 on thursday");
    assert_eq!(out.results, vec![interval("2025-01-23T09:30:00Z", "2025-01-23T11:00:00Z")]);
    assert_eq!(out.query_tag, QueryTag::Range);
}

#[test]
fn the_eighties() {
    let out = run("the 80s");
    assert_eq!(out.results, vec![interval("1980-01-01T00:00:00Z", "1989-12-31T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Range);
}

#[test]
fn tomorrow_expands_to_full_day() {
    let out = run("tomorrow");
    assert_eq!(out.results, vec![interval("2025-01-22T00:00:00Z", "2025-01-22T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Relative);
}

#[test]
fn tonight_at_eight() {
    let out = run("tonight at 8 o'clock");
    assert_eq!(out.results, vec![instant("2025-01-21T20:00:00Z")]);
}

#[test]
fn cross_midnight_range_rolls_forward() {
    let out = run("from 8:30pm until 7am");
    assert_eq!(out.results, vec![interval("2025-01-21T20:30:00Z", "2025-01-22T07:00:00Z")]);
    assert_eq!(out.query_tag, QueryTag::Range);
}

#[test]
fn tonight_to_tomorrow_morning() {
    let out = run("tonight 8:30 to tomorrow morning");
    assert_eq!(out.results, vec![interval("2025-01-21T20:30:00Z", "2025-01-22T12:00:00Z")]);
}

#[test]
fn next_monday() {
    let out = run("next monday");
    assert_eq!(out.results, vec![interval("2025-01-27T00:00:00Z", "2025-01-27T23:59:59Z")]);
}

#[test]
fn weekday_after_next() {
    let out = run("wednesday after next");
    assert_eq!(out.results, vec![interval("2025-02-05T00:00:00Z", "2025-02-05T23:59:59Z")]);
}

#[test]
fn first_tuesday_of_october() {
    let out = run("first tuesday of october");
    assert_eq!(out.results, vec![interval("2025-10-07T00:00:00Z", "2025-10-07T23:59:59Z")]);
}

#[test]
fn iso_date_with_time() {
    let out = run("2025-03-05 14:30");
    assert_eq!(out.results, vec![instant("2025-03-05T14:30:00Z")]);
    assert_eq!(out.query_tag, QueryTag::Absolute);
}

#[test]
fn month_name_date() {
    let out = run("march 5th, 2026");
    assert_eq!(out.results, vec![interval("2026-03-05T00:00:00Z", "2026-03-05T23:59:59Z")]);
}

#[test]
fn in_three_days() {
    let out = run("in 3 days");
    assert_eq!(out.results, vec![interval("2025-01-24T00:00:00Z", "2025-01-24T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Relative);
}

#[test]
fn a_couple_of_hours_later() {
    let out = run("a couple of hours later");
    assert_eq!(out.results, vec![instant("2025-01-21T10:00:00Z")]);
}

#[test]
fn half_an_hour_ago() {
    let out = run("half an hour ago");
    assert_eq!(out.results, vec![instant("2025-01-21T07:30:00Z")]);
}

#[test]
fn recently_is_a_past_bracket() {
    let out = run("recently");
    assert_eq!(out.results, vec![interval("2024-10-21T08:00:00Z", "2025-01-21T08:00:00Z")]);
}

#[test]
fn thanksgiving_is_fourth_thursday() {
    let out = run("thanksgiving");
    assert_eq!(out.results, vec![interval("2025-11-27T00:00:00Z", "2025-11-27T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Holiday);
}

#[test]
fn memorial_day_is_last_monday_of_may() {
    let out = run("memorial day");
    assert_eq!(out.results, vec![interval("2025-05-26T00:00:00Z", "2025-05-26T23:59:59Z")]);
}

#[test]
fn may_day_is_the_first_of_may() {
    let out = run("may day");
    assert_eq!(out.results, vec![interval("2025-05-01T00:00:00Z", "2025-05-01T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Holiday);
}

#[test]
fn easter_via_computus() {
    let out = run("easter");
    assert_eq!(out.results, vec![interval("2025-04-20T00:00:00Z", "2025-04-20T23:59:59Z")]);
}

#[test]
fn next_christmas_stays_this_year_before_december() {
    let out = run("next christmas");
    assert_eq!(out.results, vec![interval("2025-12-25T00:00:00Z", "2025-12-25T23:59:59Z")]);
}

#[test]
fn nineteenth_century() {
    let out = run("the 19th century");
    assert_eq!(out.results, vec![interval("1800-01-01T00:00:00Z", "1899-12-31T23:59:59Z")]);
}

#[test]
fn late_nineties() {
    let out = run("the late 90s");
    assert_eq!(out.results, vec![interval("1996-01-01T00:00:00Z", "1999-12-31T23:59:59Z")]);
}

#[test]
fn every_monday_is_recurring() {
    let out = run("every monday");
    assert_eq!(out.query_tag, QueryTag::Recurring);
    assert_eq!(out.results, vec![interval("2025-01-27T00:00:00Z", "2025-01-27T23:59:59Z")]);
}

#[test]
fn colon_range_with_hyphen() {
    let out = run("9:30-11:00");
    assert_eq!(out.results, vec![interval("2025-01-21T09:30:00Z", "2025-01-21T11:00:00Z")]);
    assert_eq!(out.query_tag, QueryTag::Range);
}

#[test]
fn plain_and_is_two_results() {
    let out = run("monday and friday");
    assert_eq!(out.results.len(), 2);
}

#[test]
fn digit_run_is_noise() {
    let out = run("1234567");
    assert!(out.results.is_empty());
    assert_eq!(out.query_tag, QueryTag::None);
}

#[test]
fn modal_may_is_not_a_month() {
    let out = run("may i help you");
    assert!(out.results.is_empty());
}

#[test]
fn base_time_linearity_for_day_deltas() {
    let a = extract_with("in 3 days", "2025-01-21T08:00:00Z", Language::English).unwrap();
    let b = extract_with("in 3 days", "2025-01-23T08:00:00Z", Language::English).unwrap();
    assert_eq!(a.results, vec![interval("2025-01-24T00:00:00Z", "2025-01-24T23:59:59Z")]);
    assert_eq!(b.results, vec![interval("2025-01-26T00:00:00Z", "2025-01-26T23:59:59Z")]);
}
