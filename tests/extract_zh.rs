//! Chinese end-to-end extraction scenarios.

use chronotag::{Extraction, Language, QueryTag, TimeResult, extract_with};

const BASE: &str = "2025-01-21T08:00:00Z";

fn run(text: &str) -> Extraction {
    extract_with(text, BASE, Language::Chinese).unwrap()
}

fn instant(s: &str) -> TimeResult {
    TimeResult::Instant(s.to_string())
}

fn interval(start: &str, end: &str) -> TimeResult {
    TimeResult::Interval(start.to_string(), end.to_string())
}

#[test]
fn tomorrow_morning_at_nine() {
    let out = run("明天上午9点");
    assert_eq!(out.results, vec![instant("2025-01-22T09:00:00Z")]);
    assert_eq!(out.query_tag, QueryTag::Relative);
}

#[test]
fn range_from_morning_to_afternoon() {
    let out = run("从明天上午9点到下午5点");
    assert_eq!(out.results, vec![interval("2025-01-22T09:00:00Z", "2025-01-22T17:00:00Z")]);
    assert_eq!(out.query_tag, QueryTag::Range);
}

#[test]
fn chained_week_offsets() {
    let out = run("下下下周一");
    assert_eq!(out.results, vec![interval("2025-02-10T00:00:00Z", "2025-02-10T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Relative);
}

#[test]
fn winter_solstice_day() {
    let out = run("冬至那天");
    assert_eq!(out.results, vec![interval("2025-12-21T00:00:00Z", "2025-12-21T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Holiday);
}

#[test]
fn midwinter_solar_terms() {
    // 小寒 and 大寒 of 2025: January 5 and January 20.
    let out = run("小寒");
    assert_eq!(out.results, vec![interval("2025-01-05T00:00:00Z", "2025-01-05T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Holiday);

    let out = run("大寒那天");
    assert_eq!(out.results, vec![interval("2025-01-20T00:00:00Z", "2025-01-20T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Holiday);
}

#[test]
fn bare_number_is_not_a_time() {
    let out = run("45901");
    assert!(out.results.is_empty());
    assert_eq!(out.query_tag, QueryTag::None);
}

#[test]
fn absolute_date_with_clock() {
    let out = run("2025年3月5日14点30分");
    assert_eq!(out.results, vec![instant("2025-03-05T14:30:00Z")]);
    assert_eq!(out.query_tag, QueryTag::Absolute);
}

#[test]
fn bare_date_expands_to_full_day() {
    let out = run("3月5日");
    assert_eq!(out.results, vec![interval("2025-03-05T00:00:00Z", "2025-03-05T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Absolute);
}

#[test]
fn afternoon_clock_gets_twelve_added() {
    let out = run("明天下午3点");
    assert_eq!(out.results, vec![instant("2025-01-22T15:00:00Z")]);
}

#[test]
fn tonight_contraction() {
    let out = run("今晚8点");
    assert_eq!(out.results, vec![instant("2025-01-21T20:00:00Z")]);
    assert_eq!(out.query_tag, QueryTag::Relative);
}

#[test]
fn last_year_september_is_a_month_range() {
    let out = run("去年九月");
    assert_eq!(out.results, vec![interval("2024-09-01T00:00:00Z", "2024-09-30T23:59:59Z")]);
}

#[test]
fn delta_days_forward() {
    let out = run("3天后");
    assert_eq!(out.results, vec![interval("2025-01-24T00:00:00Z", "2025-01-24T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Relative);
}

#[test]
fn delta_hours_back_is_an_instant() {
    let out = run("两个小时前");
    assert_eq!(out.results, vec![instant("2025-01-21T06:00:00Z")]);
}

#[test]
fn fuzzy_delta_uses_three() {
    let out = run("几天后");
    assert_eq!(out.results, vec![interval("2025-01-24T00:00:00Z", "2025-01-24T23:59:59Z")]);
}

#[test]
fn recent_year_bracket() {
    let out = run("近一年");
    assert_eq!(out.results, vec![interval("2024-01-21T08:00:00Z", "2025-01-21T08:00:00Z")]);
}

#[test]
fn spring_festival_before_lunar_new_year() {
    // 2025-01-21 is still in lunar year 2024, so 春节 is the upcoming one.
    let out = run("春节");
    assert_eq!(out.results, vec![interval("2025-01-29T00:00:00Z", "2025-01-29T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Holiday);
}

#[test]
fn national_day_week() {
    let out = run("国庆节");
    assert_eq!(out.results, vec![interval("2025-10-01T00:00:00Z", "2025-10-07T23:59:59Z")]);
}

#[test]
fn lunar_mid_autumn_date() {
    let out = run("农历八月十五");
    assert_eq!(out.results, vec![interval("2025-10-06T00:00:00Z", "2025-10-06T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Lunar);
}

#[test]
fn weekend_span() {
    let out = run("周末");
    assert_eq!(out.results, vec![interval("2025-01-25T00:00:00Z", "2025-01-26T23:59:59Z")]);
}

#[test]
fn clock_only_prefers_next_occurrence() {
    // Base is 08:00, so "3点" means 15:00 today.
    let out = run("3点");
    assert_eq!(out.results, vec![instant("2025-01-21T15:00:00Z")]);
}

#[test]
fn twentieth_century_sixties_early() {
    let out = run("20世纪60年代前期");
    assert_eq!(out.results, vec![interval("1960-01-01T00:00:00Z", "1962-12-31T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Range);
}

#[test]
fn recurring_daily_clock() {
    let out = run("每天早上8点");
    assert_eq!(out.query_tag, QueryTag::Recurring);
    // 08:00 has arrived exactly at base, so today's occurrence stands.
    assert_eq!(out.results, vec![instant("2025-01-21T08:00:00Z")]);
}

#[test]
fn degree_yidian_is_noise() {
    let out = run("简洁一点");
    assert!(out.results.is_empty());
    assert_eq!(out.query_tag, QueryTag::None);
}

#[test]
fn enumeration_dian_is_noise() {
    let out = run("再说两点");
    assert!(out.results.is_empty());
    assert_eq!(out.query_tag, QueryTag::None);
}

#[test]
fn idiom_is_noise() {
    let out = run("一日之计在于晨");
    assert!(out.results.is_empty());
}

#[test]
fn bare_year_alone_is_not_promoted() {
    let out = run("1974");
    assert!(out.results.is_empty());
    assert_eq!(out.query_tag, QueryTag::None);
}

#[test]
fn traditional_input_is_folded() {
    let out = run("後天下午3點");
    assert_eq!(out.results, vec![instant("2025-01-23T15:00:00Z")]);
}

#[test]
fn two_independent_expressions() {
    let out = run("明天9点或者后天9点");
    assert_eq!(
        out.results,
        vec![instant("2025-01-22T09:00:00Z"), instant("2025-01-23T09:00:00Z")]
    );
}

#[test]
fn weak_conjunction_does_not_build_a_range() {
    let out = run("周一和周五");
    assert_eq!(out.results.len(), 2);
}

#[test]
fn weak_conjunction_with_close_builds_a_range() {
    let out = run("周一和周五之间");
    assert_eq!(out.results, vec![interval("2025-01-20T00:00:00Z", "2025-01-24T23:59:59Z")]);
    assert_eq!(out.query_tag, QueryTag::Range);
}

#[test]
fn totality_on_garbage() {
    for text in ["", "。。。", "abc", "点点点", "年年月月", "\u{0}\u{1}"] {
        let out = run(text);
        assert_eq!(out.query_tag == QueryTag::None, out.results.is_empty());
    }
}

#[test]
fn determinism() {
    let a = run("明天上午9点");
    let b = run("明天上午9点");
    assert_eq!(a.results, b.results);
    assert_eq!(a.query_tag, b.query_tag);
}
