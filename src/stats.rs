//! Dashboard Statistics
//!
//! Pure derivation functions over the fetched collections. Everything here
//! is synchronous and side-effect free; components call these from reactive
//! closures, passing in the evaluation day where date logic is involved.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::state::global::{Course, Enrollment};

/// The chart shows at most this many courses, in received order.
const CHART_COURSE_LIMIT: usize = 8;

/// The upcoming list shows at most this many courses.
const UPCOMING_LIMIT: usize = 5;

/// Chart labels longer than this are truncated.
const LABEL_MAX_CHARS: usize = 16;

/// Truncated chart labels keep this many characters before the ellipsis.
const LABEL_KEEP_CHARS: usize = 14;

/// The current day in the browser's local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn parse_day(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|value| value.parse().ok())
}

/// Whether a course is running on `today`, at day granularity.
///
/// Active means: the start date parses and is on or before `today`, and the
/// course either has no end date or its end date parses and is on or after
/// `today`. A present but unparseable end date makes the course inactive.
pub fn is_active(course: &Course, today: NaiveDate) -> bool {
    let Some(start) = parse_day(course.fields.startdatum.as_deref()) else {
        return false;
    };
    if start > today {
        return false;
    }
    match course.fields.enddatum.as_deref() {
        None => true,
        Some(raw) => parse_day(Some(raw)).is_some_and(|end| end >= today),
    }
}

/// Number of courses active on `today`.
pub fn active_course_count(courses: &[Course], today: NaiveDate) -> usize {
    courses.iter().filter(|course| is_active(course, today)).count()
}

/// Number of enrollments whose payment flag is strictly `true`.
pub fn paid_count(enrollments: &[Enrollment]) -> usize {
    enrollments
        .iter()
        .filter(|enrollment| enrollment.fields.bezahlt == Some(true))
        .count()
}

/// Revenue aggregates over all enrollments.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevenueSummary {
    /// Total potential revenue: course price summed over every enrollment
    /// with a resolvable course reference
    pub total: f64,
    /// Collected revenue: the same sum restricted to paid enrollments
    pub paid: f64,
    /// Count of paid enrollments, resolvable or not
    pub paid_count: usize,
}

/// Compute revenue aggregates in one pass over the enrollments.
///
/// Course references resolve through an id-keyed map; an enrollment whose
/// reference is missing or does not match any course contributes nothing to
/// the sums. A resolvable course without a price contributes zero.
pub fn revenue_summary(courses: &[Course], enrollments: &[Enrollment]) -> RevenueSummary {
    let price_by_id: HashMap<&str, f64> = courses
        .iter()
        .map(|course| (course.record_id.as_str(), course.fields.preis.unwrap_or(0.0)))
        .collect();

    let mut summary = RevenueSummary::default();
    for enrollment in enrollments {
        let paid = enrollment.fields.bezahlt == Some(true);
        if paid {
            summary.paid_count += 1;
        }
        let Some(id) = enrollment.fields.kurs.as_ref().and_then(|r| r.course_id()) else {
            continue;
        };
        let Some(price) = price_by_id.get(id) else {
            continue;
        };
        summary.total += price;
        if paid {
            summary.paid += price;
        }
    }
    summary
}

/// One bar of the enrollments-per-course chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartEntry {
    /// Course title, truncated for display
    pub label: String,
    /// Enrollments resolving to this course
    pub enrollment_count: usize,
}

/// Chart data for the first 8 courses in received order.
pub fn enrollment_chart_data(courses: &[Course], enrollments: &[Enrollment]) -> Vec<ChartEntry> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for enrollment in enrollments {
        if let Some(id) = enrollment.fields.kurs.as_ref().and_then(|r| r.course_id()) {
            *counts.entry(id).or_insert(0) += 1;
        }
    }

    courses
        .iter()
        .take(CHART_COURSE_LIMIT)
        .map(|course| ChartEntry {
            label: chart_label(course.fields.titel.as_deref()),
            enrollment_count: counts.get(course.record_id.as_str()).copied().unwrap_or(0),
        })
        .collect()
}

/// Display label for a course title.
///
/// Titles longer than 16 characters are cut to their first 14 characters
/// plus an ellipsis; counts are characters, not bytes. Missing or empty
/// titles become a dash placeholder.
pub fn chart_label(titel: Option<&str>) -> String {
    match titel {
        Some(titel) if !titel.is_empty() => {
            if titel.chars().count() > LABEL_MAX_CHARS {
                let head: String = titel.chars().take(LABEL_KEEP_CHARS).collect();
                format!("{head}…")
            } else {
                titel.to_string()
            }
        }
        _ => "—".to_string(),
    }
}

/// The next courses starting strictly after `today`.
///
/// Sorted ascending by start-date string (lexicographic, which orders
/// well-formed ISO dates chronologically), capped at 5.
pub fn upcoming_courses<'a>(courses: &'a [Course], today: NaiveDate) -> Vec<&'a Course> {
    let mut upcoming: Vec<&Course> = courses
        .iter()
        .filter(|course| {
            parse_day(course.fields.startdatum.as_deref()).is_some_and(|start| start > today)
        })
        .collect();
    upcoming.sort_by(|a, b| a.fields.startdatum.cmp(&b.fields.startdatum));
    upcoming.truncate(UPCOMING_LIMIT);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::{CourseFields, CourseRef, EnrollmentFields, Record};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn course(id: &str, start: Option<&str>, end: Option<&str>, preis: Option<f64>) -> Course {
        Record {
            record_id: id.to_string(),
            fields: CourseFields {
                titel: Some(format!("Kurs {id}")),
                startdatum: start.map(str::to_string),
                enddatum: end.map(str::to_string),
                preis,
            },
        }
    }

    fn titled_course(id: &str, titel: Option<&str>) -> Course {
        Record {
            record_id: id.to_string(),
            fields: CourseFields {
                titel: titel.map(str::to_string),
                ..Default::default()
            },
        }
    }

    fn enrollment(kurs: Option<&str>, bezahlt: Option<bool>) -> Enrollment {
        Record {
            record_id: format!("a-{}", kurs.unwrap_or("none")),
            fields: EnrollmentFields {
                kurs: kurs.map(|raw| CourseRef(raw.to_string())),
                bezahlt,
            },
        }
    }

    #[test]
    fn test_active_starting_today_without_end() {
        let today = day(2026, 8, 6);
        assert!(is_active(&course("k1", Some("2026-08-06"), None, None), today));
    }

    #[test]
    fn test_active_ending_today() {
        let today = day(2026, 8, 6);
        assert!(is_active(
            &course("k1", Some("2026-07-01"), Some("2026-08-06"), None),
            today
        ));
    }

    #[test]
    fn test_inactive_ended_yesterday() {
        let today = day(2026, 8, 6);
        assert!(!is_active(
            &course("k1", Some("2026-07-01"), Some("2026-08-05"), None),
            today
        ));
    }

    #[test]
    fn test_inactive_without_start_or_not_yet_started() {
        let today = day(2026, 8, 6);
        assert!(!is_active(&course("k1", None, None, None), today));
        assert!(!is_active(&course("k2", Some("2026-08-07"), None, None), today));
    }

    #[test]
    fn test_inactive_on_unparseable_dates() {
        let today = day(2026, 8, 6);
        assert!(!is_active(&course("k1", Some("next week"), None, None), today));
        assert!(!is_active(
            &course("k2", Some("2026-08-01"), Some("soon"), None),
            today
        ));
    }

    #[test]
    fn test_active_course_count() {
        let today = day(2026, 8, 6);
        let courses = vec![
            course("k1", Some("2026-08-01"), None, None),
            course("k2", Some("2026-09-01"), None, None),
            course("k3", Some("2026-06-01"), Some("2026-07-01"), None),
        ];
        assert_eq!(active_course_count(&courses, today), 1);
    }

    #[test]
    fn test_paid_count_only_strict_true() {
        let enrollments = vec![
            enrollment(Some("k1"), Some(true)),
            enrollment(Some("k1"), Some(false)),
            enrollment(Some("k1"), None),
        ];
        assert_eq!(paid_count(&enrollments), 1);
        assert!(paid_count(&enrollments) <= enrollments.len());
    }

    #[test]
    fn test_revenue_scenario() {
        // Three courses: A at 100 with no enrollments, B at 200 with two
        // enrollments of which one is paid, C at 50 with one paid enrollment.
        let courses = vec![
            course("a", None, None, Some(100.0)),
            course("b", None, None, Some(200.0)),
            course("c", None, None, Some(50.0)),
        ];
        let enrollments = vec![
            enrollment(Some("b"), Some(true)),
            enrollment(Some("b"), Some(false)),
            enrollment(Some("c"), Some(true)),
        ];

        let summary = revenue_summary(&courses, &enrollments);
        assert_eq!(summary.total, 450.0);
        assert_eq!(summary.paid, 250.0);
        assert_eq!(summary.paid_count, 2);
        assert_eq!(summary.paid_count, paid_count(&enrollments));
        assert!(summary.paid <= summary.total);
    }

    #[test]
    fn test_revenue_resolves_path_references() {
        let courses = vec![course("k1", None, None, Some(80.0))];
        let enrollments = vec![enrollment(Some("apps/7/records/k1"), Some(true))];

        let summary = revenue_summary(&courses, &enrollments);
        assert_eq!(summary.total, 80.0);
        assert_eq!(summary.paid, 80.0);
    }

    #[test]
    fn test_revenue_ignores_unresolvable_references() {
        let courses = vec![course("k1", None, None, Some(100.0))];
        let enrollments = vec![
            enrollment(Some("k1"), Some(true)),
            enrollment(Some("unknown"), Some(true)),
            enrollment(Some("apps/7/records/"), Some(true)),
            enrollment(None, Some(true)),
        ];

        let summary = revenue_summary(&courses, &enrollments);
        assert_eq!(summary.total, 100.0);
        assert_eq!(summary.paid, 100.0);
        // Unresolvable enrollments still count as paid
        assert_eq!(summary.paid_count, 4);
    }

    #[test]
    fn test_revenue_missing_price_counts_as_zero() {
        let courses = vec![course("k1", None, None, None)];
        let enrollments = vec![enrollment(Some("k1"), Some(true))];

        let summary = revenue_summary(&courses, &enrollments);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.paid, 0.0);
        assert_eq!(summary.paid_count, 1);
    }

    #[test]
    fn test_chart_data_caps_at_eight_in_received_order() {
        let courses: Vec<Course> = (0..10)
            .map(|i| titled_course(&format!("k{i}"), Some(&format!("Kurs {i}"))))
            .collect();
        let data = enrollment_chart_data(&courses, &[]);
        assert_eq!(data.len(), 8);
        assert_eq!(data[0].label, "Kurs 0");
        assert_eq!(data[7].label, "Kurs 7");
    }

    #[test]
    fn test_chart_data_counts_resolving_enrollments() {
        let courses = vec![titled_course("k1", Some("Yoga")), titled_course("k2", Some("Töpfern"))];
        let enrollments = vec![
            enrollment(Some("k1"), Some(true)),
            enrollment(Some("apps/7/records/k1"), None),
            enrollment(Some("k2"), Some(false)),
            enrollment(Some("unknown"), Some(true)),
            enrollment(None, None),
        ];

        let data = enrollment_chart_data(&courses, &enrollments);
        assert_eq!(data[0].enrollment_count, 2);
        assert_eq!(data[1].enrollment_count, 1);
    }

    #[test]
    fn test_chart_label_boundaries() {
        // 16 characters pass through untouched, 17 get cut to 14 plus ellipsis
        let sixteen = "ABCDEFGHIJKLMNOP";
        let seventeen = "ABCDEFGHIJKLMNOPQ";
        assert_eq!(chart_label(Some(sixteen)), sixteen);
        assert_eq!(chart_label(Some(seventeen)), "ABCDEFGHIJKLMN…");
    }

    #[test]
    fn test_chart_label_counts_characters_not_bytes() {
        let umlauts = "Äöüßäöüßäöüßäöüß";
        assert_eq!(umlauts.chars().count(), 16);
        assert_eq!(chart_label(Some(umlauts)), umlauts);
    }

    #[test]
    fn test_chart_label_placeholder() {
        assert_eq!(chart_label(None), "—");
        assert_eq!(chart_label(Some("")), "—");
    }

    #[test]
    fn test_upcoming_excludes_today_and_past() {
        let today = day(2026, 8, 6);
        let courses = vec![
            course("past", Some("2026-08-01"), None, None),
            course("today", Some("2026-08-06"), None, None),
            course("future", Some("2026-08-07"), None, None),
            course("undated", None, None, None),
        ];

        let upcoming = upcoming_courses(&courses, today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].record_id, "future");
    }

    #[test]
    fn test_upcoming_sorted_ascending_and_capped() {
        let today = day(2026, 8, 6);
        let starts = [
            "2026-12-01",
            "2026-09-15",
            "2027-01-10",
            "2026-08-20",
            "2026-10-05",
            "2026-11-11",
            "2026-09-01",
        ];
        let courses: Vec<Course> = starts
            .iter()
            .enumerate()
            .map(|(i, start)| course(&format!("k{i}"), Some(start), None, None))
            .collect();

        let upcoming = upcoming_courses(&courses, today);
        assert_eq!(upcoming.len(), 5);
        let dates: Vec<&str> = upcoming
            .iter()
            .map(|course| course.fields.startdatum.as_deref().unwrap())
            .collect();
        assert_eq!(
            dates,
            vec!["2026-08-20", "2026-09-01", "2026-09-15", "2026-10-05", "2026-11-11"]
        );
    }
}
