use std::sync::{Arc, Mutex};

use country_stats::analysis::{analyze_lines_with, analyze_path, analyze_regions, AnalysisOptions};
use country_stats::ingestion::{
    AnalysisContext, AnalysisObserver, AnalysisSeverity, AnalysisStats, CompositeObserver,
};
use country_stats::AnalysisError;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Success(String, AnalysisStats),
    Failure(String, AnalysisSeverity),
    Alert(String, AnalysisSeverity),
}

#[derive(Default)]
struct Recording {
    events: Mutex<Vec<Event>>,
}

impl Recording {
    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl AnalysisObserver for Recording {
    fn on_success(&self, ctx: &AnalysisContext, stats: AnalysisStats) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Success(ctx.region.clone(), stats));
    }

    fn on_failure(&self, ctx: &AnalysisContext, severity: AnalysisSeverity, _error: &AnalysisError) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Failure(ctx.region.clone(), severity));
    }

    fn on_alert(&self, ctx: &AnalysisContext, severity: AnalysisSeverity, _error: &AnalysisError) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Alert(ctx.region.clone(), severity));
    }
}

const SCENARIO: [&str; 4] = [
    "name,pop,q,x,area,region",
    "a,100,1,_,10,asia",
    "b,400,1,_,20,asia",
    "c,50,-1,_,5,europe",
];

fn options_with(observer: Arc<Recording>) -> AnalysisOptions {
    AnalysisOptions {
        observer: Some(observer),
        ..Default::default()
    }
}

#[test]
fn success_reports_row_counts() {
    let rec = Arc::new(Recording::default());
    analyze_lines_with(&SCENARIO, "asia", &options_with(rec.clone())).unwrap();

    assert_eq!(
        rec.events(),
        vec![Event::Success(
            "asia".to_string(),
            AnalysisStats {
                input_rows: 4,
                shaped_rows: 2
            }
        )]
    );
}

#[test]
fn unreadable_source_is_critical_and_alerts() {
    let rec = Arc::new(Recording::default());
    let err = analyze_path(
        "tests/fixtures/no_such_file.csv",
        "Asia",
        &options_with(rec.clone()),
    )
    .unwrap_err();
    assert!(matches!(err, AnalysisError::Csv(_) | AnalysisError::Io(_)));

    assert_eq!(
        rec.events(),
        vec![
            Event::Failure("Asia".to_string(), AnalysisSeverity::Critical),
            Event::Alert("Asia".to_string(), AnalysisSeverity::Critical),
        ]
    );
}

#[test]
fn statistics_failures_stay_below_the_default_alert_threshold() {
    let rec = Arc::new(Recording::default());
    assert!(analyze_lines_with(&SCENARIO, "oceania", &options_with(rec.clone())).is_err());

    assert_eq!(
        rec.events(),
        vec![Event::Failure("oceania".to_string(), AnalysisSeverity::Error)]
    );
}

#[test]
fn lowered_threshold_alerts_on_ordinary_errors() {
    let rec = Arc::new(Recording::default());
    let opts = AnalysisOptions {
        alert_at_or_above: AnalysisSeverity::Error,
        ..options_with(rec.clone())
    };
    assert!(analyze_lines_with(&SCENARIO, "oceania", &opts).is_err());

    assert_eq!(
        rec.events(),
        vec![
            Event::Failure("oceania".to_string(), AnalysisSeverity::Error),
            Event::Alert("oceania".to_string(), AnalysisSeverity::Error),
        ]
    );
}

#[test]
fn every_region_is_reported_through_a_composite() {
    let first = Arc::new(Recording::default());
    let second = Arc::new(Recording::default());
    let composite = CompositeObserver::new(vec![
        first.clone() as Arc<dyn AnalysisObserver>,
        second.clone() as Arc<dyn AnalysisObserver>,
    ]);
    let opts = AnalysisOptions {
        observer: Some(Arc::new(composite)),
        ..Default::default()
    };

    let results = analyze_regions(&SCENARIO, &["asia", "oceania"], &opts);
    assert!(results[0].1.is_ok());
    assert!(results[1].1.is_err());

    for rec in [&first, &second] {
        let events = rec.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], Event::Success(r, _) if r == "asia"));
        assert_eq!(
            events[1],
            Event::Failure("oceania".to_string(), AnalysisSeverity::Error)
        );
    }
}
