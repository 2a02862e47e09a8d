//! Experience Aggregator: turns the flat upstream experience list into
//! company groups ready for the timeline.
//!
//! Pure: no I/O, no shared state. `aggregate_at` takes the reference date for
//! ongoing records so results are reproducible.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::models::experience::{CompanyGroup, ExperienceRecord};
use crate::timeline::dates::{duration, parse_lenient, unparseable_date_sentinel, ONGOING_SORT_SENTINEL};

/// Groups `records` by company using today's date for ongoing work.
pub fn aggregate(records: Vec<ExperienceRecord>) -> Vec<CompanyGroup> {
    aggregate_at(records, Utc::now().date_naive())
}

/// Groups `records` by company.
///
/// 1. Sort newest-first (see `compare_newest_first`)
/// 2. Partition by `company`, keeping first-seen order of the sorted list so
///    the most recently active company leads
/// 3. Annotate each group with its total span and work-type diversity
pub fn aggregate_at(mut records: Vec<ExperienceRecord>, today: NaiveDate) -> Vec<CompanyGroup> {
    let record_count = records.len();
    records.sort_by(compare_newest_first);

    let mut partitions: Vec<(String, Vec<ExperienceRecord>)> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();

    for record in records {
        match position.get(&record.company) {
            Some(&idx) => partitions[idx].1.push(record),
            None => {
                position.insert(record.company.clone(), partitions.len());
                partitions.push((record.company.clone(), vec![record]));
            }
        }
    }

    let groups: Vec<CompanyGroup> = partitions
        .into_iter()
        .map(|(company, projects)| annotate(company, projects, today))
        .collect();

    debug!(
        "Aggregated {} experience records into {} company groups",
        record_count,
        groups.len()
    );

    groups
}

/// Sort key for the end of a record: its end date, or the far-future sentinel
/// while it is ongoing.
pub fn effective_end(record: &ExperienceRecord) -> NaiveDate {
    record
        .end_date_str()
        .map(parse_lenient)
        .unwrap_or(ONGOING_SORT_SENTINEL)
}

/// Newest-first ordering.
///
/// Ongoing records lead; two ongoing records compare by start date, anything
/// else by effective end. Remaining ties fall back to the later start and
/// then to the record contents, so the order never depends on input order.
pub fn compare_newest_first(a: &ExperienceRecord, b: &ExperienceRecord) -> Ordering {
    let start_desc = || parse_lenient(&b.start_date).cmp(&parse_lenient(&a.start_date));

    let primary = match (a.is_ongoing(), b.is_ongoing()) {
        (true, true) => start_desc(),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => effective_end(b).cmp(&effective_end(a)),
    };

    primary.then_with(start_desc).then_with(|| a.cmp(b))
}

fn annotate(company: String, projects: Vec<ExperienceRecord>, today: NaiveDate) -> CompanyGroup {
    let earliest_start = projects
        .iter()
        .map(|p| parse_lenient(&p.start_date))
        .min()
        .unwrap_or_else(unparseable_date_sentinel);

    // projects[0] is the most recent engagement after sorting
    let latest_end = match projects.first().and_then(|p| p.end_date_str()) {
        Some(end) => parse_lenient(end),
        None => today,
    };

    let work_types: HashSet<&str> = projects.iter().filter_map(|p| p.work_type_str()).collect();
    let has_multiple_work_types = work_types.len() > 1;

    CompanyGroup {
        company,
        total_duration: duration(earliest_start, latest_end),
        has_multiple_work_types,
        projects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(company: &str, start: &str, end: Option<&str>, work_type: Option<&str>) -> ExperienceRecord {
        ExperienceRecord {
            company: company.to_string(),
            job_title: format!("Developer at {company}"),
            work_type: work_type.map(str::to_string),
            start_date: start.to_string(),
            end_date: end.map(str::to_string),
            description: format!("{company} {start}"),
            technologies: vec![],
            location: None,
            ubication: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn sample() -> Vec<ExperienceRecord> {
        vec![
            record("Globex", "2015-03-01", Some("2017-08-31"), Some("Presencial")),
            record("Acme", "2019-01-01", Some("2021-05-31"), Some("Presencial")),
            record("Initech", "2017-09-01", Some("2018-12-20"), None),
            record("Acme", "2021-06-01", None, Some("Remoto")),
            record("Globex", "2018-01-01", Some("2018-10-01"), Some("Presencial")),
            record("Umbrella", "2023-02-01", None, Some("Híbrido")),
        ]
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(aggregate_at(vec![], today()).is_empty());
    }

    #[test]
    fn test_acme_scenario_groups_with_ongoing_first() {
        let records = vec![
            record("Acme", "2021-06-01", None, Some("Remoto")),
            record("Acme", "2019-01-01", Some("2021-05-31"), Some("Presencial")),
        ];
        let groups = aggregate_at(records, today());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].company, "Acme");
        assert!(groups[0].has_multiple_work_types);
        assert!(groups[0].projects[0].is_ongoing());
        assert_eq!(groups[0].projects[1].end_date.as_deref(), Some("2021-05-31"));
        // 2019-01-01 .. 2024-06-10
        assert_eq!(groups[0].total_duration, "5 años y 5 meses");
    }

    #[test]
    fn test_ongoing_company_sorts_before_completed_company() {
        let records = vec![
            record("Recent", "2023-01-01", Some("2024-05-31"), None),
            record("OldButOngoing", "2010-01-01", None, None),
        ];
        let groups = aggregate_at(records, today());
        assert_eq!(groups[0].company, "OldButOngoing");
        assert_eq!(groups[1].company, "Recent");
    }

    #[test]
    fn test_every_record_lands_in_exactly_one_group() {
        let records = sample();
        let groups = aggregate_at(records.clone(), today());

        let total: usize = groups.iter().map(|g| g.projects.len()).sum();
        assert_eq!(total, records.len());

        for r in &records {
            let hits = groups
                .iter()
                .flat_map(|g| g.projects.iter())
                .filter(|p| *p == r)
                .count();
            assert_eq!(hits, 1, "record {r:?} must appear once");
        }
        for g in &groups {
            assert!(g.projects.iter().all(|p| p.company == g.company));
        }
    }

    #[test]
    fn test_grouping_independent_of_input_order() {
        let records = sample();
        let expected = aggregate_at(records.clone(), today());

        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(aggregate_at(reversed, today()), expected);

        for shift in 1..records.len() {
            let mut rotated = records.clone();
            rotated.rotate_left(shift);
            assert_eq!(aggregate_at(rotated, today()), expected);
        }
    }

    #[test]
    fn test_ties_are_order_independent() {
        let a = record("Acme", "2020-01-01", Some("2021-01-01"), Some("Remoto"));
        let mut b = a.clone();
        b.job_title = "Consultant".to_string();

        let forward = aggregate_at(vec![a.clone(), b.clone()], today());
        let backward = aggregate_at(vec![b, a], today());
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_completed_records_ordered_by_end_date_desc() {
        let groups = aggregate_at(sample(), today());
        let globex = groups.iter().find(|g| g.company == "Globex").unwrap();
        assert_eq!(globex.projects[0].end_date.as_deref(), Some("2018-10-01"));
        assert_eq!(globex.projects[1].end_date.as_deref(), Some("2017-08-31"));

        for group in &groups {
            let completed: Vec<NaiveDate> = group
                .projects
                .iter()
                .filter(|p| !p.is_ongoing())
                .map(effective_end)
                .collect();
            assert!(completed.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_groups_ordered_by_most_recent_activity() {
        let groups = aggregate_at(sample(), today());
        let order: Vec<&str> = groups.iter().map(|g| g.company.as_str()).collect();
        // Umbrella and Acme are ongoing (Umbrella started later)
        assert_eq!(order, vec!["Umbrella", "Acme", "Initech", "Globex"]);
    }

    #[test]
    fn test_two_ongoing_records_later_start_first() {
        let groups = aggregate_at(
            vec![
                record("Acme", "2020-01-01", None, None),
                record("Acme", "2022-01-01", None, None),
            ],
            today(),
        );
        assert_eq!(groups[0].projects[0].start_date, "2022-01-01");
    }

    #[test]
    fn test_total_duration_spans_whole_group() {
        let groups = aggregate_at(sample(), today());
        let globex = groups.iter().find(|g| g.company == "Globex").unwrap();
        // 2015-03-01 .. 2018-10-01
        assert_eq!(globex.total_duration, "3 años y 7 meses");
    }

    #[test]
    fn test_single_record_group() {
        let groups = aggregate_at(
            vec![record("Solo", "2022-01-01", Some("2022-03-05"), Some("Remoto"))],
            today(),
        );
        assert_eq!(groups.len(), 1);
        assert!(!groups[0].has_multiple_work_types);
        assert_eq!(groups[0].total_duration, "2 meses");
    }

    #[test]
    fn test_blank_work_types_do_not_count() {
        let groups = aggregate_at(
            vec![
                record("Acme", "2020-01-01", Some("2020-06-01"), Some("Remoto")),
                record("Acme", "2020-07-01", Some("2020-12-01"), Some("")),
                record("Acme", "2021-01-01", Some("2021-06-01"), None),
            ],
            today(),
        );
        assert!(!groups[0].has_multiple_work_types);
    }

    #[test]
    fn test_malformed_dates_sort_last_without_failing() {
        let groups = aggregate_at(
            vec![
                record("Broken", "garbage", Some("also garbage"), None),
                record("Fine", "2020-01-01", Some("2021-01-01"), None),
            ],
            today(),
        );
        assert_eq!(groups[0].company, "Fine");
        assert_eq!(groups[1].company, "Broken");
        assert_eq!(groups[1].total_duration, "Menos de un mes");
    }

    #[test]
    fn test_reaggregating_flattened_groups_is_stable() {
        let first = aggregate_at(sample(), today());
        let flattened: Vec<ExperienceRecord> =
            first.iter().flat_map(|g| g.projects.clone()).collect();
        assert_eq!(aggregate_at(flattened, today()), first);
    }
}
