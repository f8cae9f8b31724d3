use preview_ir::parse::parse_directive;
use preview_ir::types::{DesignDirective, EventRecord};
use preview_views::classify::{classify, classify_events, AuditCategory, DecisionStage, Layer};

fn get_test_directive() -> DesignDirective {
    let json = include_str!("../../preview-ir/tests/fixtures/operator_day.json");
    parse_directive(json).unwrap()
}

fn event(stage: Option<i64>, title: &str) -> EventRecord {
    EventRecord {
        stage,
        title: Some(title.to_string()),
        ..Default::default()
    }
}

fn titles<'a>(events: &[&'a EventRecord]) -> Vec<&'a str> {
    events
        .iter()
        .map(|e| e.title.as_deref().unwrap_or(""))
        .collect()
}

#[test]
fn test_layer_dispatch() {
    assert_eq!(Layer::of_stage(1), Some(Layer::Decision(DecisionStage::Reasoning)));
    assert_eq!(Layer::of_stage(7), Some(Layer::Decision(DecisionStage::Evolution)));
    assert_eq!(Layer::of_stage(8), Some(Layer::Audit(AuditCategory::Observation)));
    assert_eq!(Layer::of_stage(9), Some(Layer::Audit(AuditCategory::Evaluation)));
    assert_eq!(Layer::of_stage(10), Some(Layer::Audit(AuditCategory::Evolution)));
    assert_eq!(Layer::of_stage(0), None);
    assert_eq!(Layer::of_stage(-1), None);
    assert_eq!(Layer::of_stage(11), None);
}

#[test]
fn test_stage_numbers_round_trip() {
    for stage in DecisionStage::ALL {
        assert_eq!(DecisionStage::from_stage(stage.number() as i64), Some(stage));
    }
    for category in AuditCategory::ALL {
        assert_eq!(AuditCategory::from_stage(category.stage() as i64), Some(category));
    }
}

#[test]
fn test_mixed_scenario() {
    let mut safety = event(Some(1), "A");
    safety.safety_trigger = Some(true);
    let events = vec![
        safety,
        event(Some(8), "Obs1"),
        event(Some(9), "Eval1"),
        event(Some(11), "Dropped"),
    ];
    let classified = classify_events(&events);

    assert_eq!(titles(&classified.decisions), vec!["A"]);
    assert_eq!(titles(&classified.audit.observation), vec!["Obs1"]);
    assert_eq!(titles(&classified.audit.evaluation), vec!["Eval1"]);
    assert!(classified.audit.evolution.is_empty());
    assert_eq!(classified.len(), 3);
}

#[test]
fn test_missing_stage_is_dropped() {
    let events = vec![event(None, "Unstaged"), event(Some(0), "Zero")];
    let classified = classify_events(&events);
    assert!(classified.is_empty());
}

#[test]
fn test_classified_records_reference_originals() {
    let directive = get_test_directive();
    let classified = classify(&directive);
    let first = classified.decisions[0];
    assert!(std::ptr::eq(first, &directive.events()[0]));
    let observation = classified.audit.observation[0];
    assert!(std::ptr::eq(observation, &directive.events()[4]));
}

#[test]
fn test_fixture_partition() {
    let directive = get_test_directive();
    let classified = classify(&directive);

    assert_eq!(
        titles(&classified.decisions),
        vec![
            "Morning demand forecast",
            "Credit policy check",
            "Unusual withdrawal pattern",
            "Supplier contract renewal",
            "Decision log archived",
            "Routing rebalanced",
            "Threshold tuning proposal",
            "End-of-day summary",
        ]
    );
    assert_eq!(
        titles(&classified.audit.observation),
        vec!["Scoring latency observation"]
    );
    assert_eq!(
        titles(&classified.audit.evaluation),
        vec!["Weekly accuracy evaluation"]
    );
    assert!(classified.audit.evolution.is_empty());

    let all_titles: Vec<_> = titles(&classified.decisions)
        .into_iter()
        .chain(classified.audit.iter().flat_map(|(_, bucket)| titles(bucket)))
        .collect();
    assert!(!all_titles.contains(&"Orphaned telemetry"));
    assert!(!all_titles.contains(&"Unstaged note"));
}

#[test]
fn test_partition_is_exhaustive_and_exclusive() {
    let stages: Vec<Option<i64>> = (-2..=13).map(Some).chain([None]).collect();
    // Interleave stages so every group receives events from scattered positions.
    let events: Vec<EventRecord> = (0..stages.len() * 3)
        .map(|i| {
            let stage = stages[(i * 7) % stages.len()];
            event(stage, &format!("event-{i}"))
        })
        .collect();
    let classified = classify_events(&events);

    let in_range: Vec<&EventRecord> = events
        .iter()
        .filter(|e| (1..=10).contains(&e.stage()))
        .collect();
    assert_eq!(classified.len(), in_range.len());

    for e in &in_range {
        let hits = classified
            .decisions
            .iter()
            .chain(classified.audit.observation.iter())
            .chain(classified.audit.evaluation.iter())
            .chain(classified.audit.evolution.iter())
            .filter(|c| std::ptr::eq(**c, *e))
            .count();
        assert_eq!(hits, 1, "{:?} must appear in exactly one group", e.title);
    }

    assert!(classified.decisions.iter().all(|e| (1..=7).contains(&e.stage())));
    assert!(classified.audit.observation.iter().all(|e| e.stage() == 8));
    assert!(classified.audit.evaluation.iter().all(|e| e.stage() == 9));
    assert!(classified.audit.evolution.iter().all(|e| e.stage() == 10));
}

#[test]
fn test_classification_is_stable() {
    let events: Vec<EventRecord> = (0..30)
        .map(|i| event(Some((i % 10) + 1), &format!("{i:02}")))
        .collect();
    let classified = classify_events(&events);

    let groups = [
        titles(&classified.decisions),
        titles(&classified.audit.observation),
        titles(&classified.audit.evaluation),
        titles(&classified.audit.evolution),
    ];
    for group in groups {
        let mut sorted = group.clone();
        sorted.sort();
        assert_eq!(group, sorted, "group order must follow input order");
    }
}

#[test]
fn test_missing_events_path_classifies_empty() {
    let directive = parse_directive(r#"{ "system_name": "Desk" }"#).unwrap();
    let classified = classify(&directive);
    assert!(classified.decisions.is_empty());
    for (_, bucket) in classified.audit.iter() {
        assert!(bucket.is_empty());
    }
}

#[test]
fn test_audit_buckets_iterate_in_panel_order() {
    let directive = get_test_directive();
    let classified = classify(&directive);
    let order: Vec<_> = classified.audit.iter().map(|(c, _)| c).collect();
    assert_eq!(order, AuditCategory::ALL.to_vec());
}
