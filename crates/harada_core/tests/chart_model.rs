use chrono::NaiveDate;
use harada_core::{
    Chart, ChartValidationError, Pillar, PillarColor, RingPosition, Task, TaskFrequency,
    TaskStatus,
};
use uuid::Uuid;

fn pos(value: u8) -> RingPosition {
    RingPosition::new(value).unwrap()
}

fn chart_with_tasks() -> Chart {
    let mut chart = Chart::new("Test Chart", "Launch a website by end of 2026");
    for position in RingPosition::ALL {
        let pillar = Pillar::new(position, format!("Pillar {position}"));
        for task_position in RingPosition::ALL {
            chart.tasks.push(Task::new(
                pillar.id,
                task_position,
                format!("{} Task {}", pillar.name, task_position),
            ));
        }
        chart.pillars.push(pillar);
    }
    chart
}

fn mark_done(chart: &mut Chart, count: usize) {
    for task in chart.tasks.iter_mut().take(count) {
        task.status = TaskStatus::Done;
    }
}

#[test]
fn new_chart_is_an_empty_draft() {
    let chart = Chart::new("Title", "Goal");
    assert!(!chart.id.is_nil());
    assert!(chart.is_draft);
    assert!(chart.pillars.is_empty());
    assert!(chart.tasks.is_empty());
    assert_eq!(chart.target_date, None);
    chart.validate().unwrap();
}

#[test]
fn new_task_defaults_to_todo_one_time() {
    let task = Task::new(Uuid::new_v4(), pos(1), "Task 1");
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.frequency, TaskFrequency::OneTime);
    assert!(task.description.is_empty());
}

#[test]
fn completion_percentage_without_tasks_is_zero() {
    let chart = Chart::new("Empty", "Goal");
    assert_eq!(chart.completion_percentage(), 0);
}

#[test]
fn completion_percentage_tracks_done_tasks() {
    let mut chart = chart_with_tasks();
    assert_eq!(chart.tasks.len(), 64);
    assert_eq!(chart.completion_percentage(), 0);

    mark_done(&mut chart, 16);
    assert_eq!(chart.completion_percentage(), 25);

    mark_done(&mut chart, 32);
    assert_eq!(chart.completion_percentage(), 50);

    mark_done(&mut chart, 64);
    assert_eq!(chart.completion_percentage(), 100);
}

#[test]
fn in_progress_tasks_do_not_count_as_done() {
    let mut chart = chart_with_tasks();
    for task in chart.tasks.iter_mut() {
        task.status = TaskStatus::InProgress;
    }
    assert_eq!(chart.completion_percentage(), 0);
}

#[test]
fn full_chart_validates() {
    chart_with_tasks().validate().unwrap();
}

#[test]
fn validate_rejects_duplicate_pillar_position() {
    let mut chart = chart_with_tasks();
    chart.pillars.push(Pillar::new(pos(1), "Duplicate"));
    assert_eq!(
        chart.validate(),
        Err(ChartValidationError::DuplicatePillarPosition(pos(1)))
    );
}

#[test]
fn validate_rejects_duplicate_task_position() {
    let mut chart = chart_with_tasks();
    let pillar_id = chart.pillars[0].id;
    chart.tasks.push(Task::new(pillar_id, pos(1), "Task 2"));
    assert_eq!(
        chart.validate(),
        Err(ChartValidationError::DuplicateTaskPosition {
            pillar_id,
            position: pos(1),
        })
    );
}

#[test]
fn validate_rejects_task_of_foreign_pillar() {
    let mut chart = Chart::new("Title", "Goal");
    let stray = Task::new(Uuid::new_v4(), pos(4), "stray");
    chart.tasks.push(stray.clone());
    assert_eq!(
        chart.validate(),
        Err(ChartValidationError::UnknownPillar {
            task_id: stray.id,
            pillar_id: stray.pillar_id,
        })
    );
}

#[test]
fn validate_rejects_blank_names() {
    let mut chart = Chart::new("Title", "Goal");
    let pillar = Pillar::new(pos(2), "   ");
    chart.pillars.push(pillar.clone());
    assert_eq!(
        chart.validate(),
        Err(ChartValidationError::BlankPillarName(pillar.id))
    );
}

#[test]
fn chart_rejects_impossible_target_date_on_the_wire() {
    let mut json = serde_json::to_value(Chart::new("Title", "Goal")).unwrap();
    json["target_date"] = "2026-02-30".into();
    assert!(serde_json::from_value::<Chart>(json).is_err());
}

#[test]
fn chart_serialization_uses_expected_wire_fields() {
    let chart_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let pillar_id = Uuid::parse_str("22222222-2222-4333-8444-555555555555").unwrap();
    let task_id = Uuid::parse_str("33333333-2222-4333-8444-555555555555").unwrap();

    let mut chart = Chart::new("Build a SaaS Product", "Profitable SaaS by 2026");
    chart.id = chart_id;
    chart.target_date = NaiveDate::from_ymd_opt(2026, 12, 31);
    chart.pillars.push(Pillar::with_id(pillar_id, pos(4), "Finance").colored(PillarColor::Indigo));
    let mut task = Task::with_id(task_id, pillar_id, pos(6), "Review budget");
    task.status = TaskStatus::InProgress;
    task.frequency = TaskFrequency::Routine;
    chart.tasks.push(task);

    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["id"], chart_id.to_string());
    assert_eq!(json["is_draft"], true);
    assert_eq!(json["target_date"], "2026-12-31");
    assert_eq!(json["perspectives"]["self_tangible"], "");
    assert_eq!(json["pillars"][0]["color"], "indigo");
    assert_eq!(json["pillars"][0]["position"], 4);
    assert_eq!(json["tasks"][0]["status"], "in_progress");
    assert_eq!(json["tasks"][0]["frequency"], "routine");
    assert_eq!(json["tasks"][0]["pillar_id"], pillar_id.to_string());

    let decoded: Chart = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, chart);
}

#[test]
fn deserialize_applies_entity_defaults() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "Minimal",
        "core_goal": "Goal",
        "pillars": [
            {"id": "22222222-2222-4333-8444-555555555555", "name": "Health", "position": 1}
        ],
        "tasks": [
            {
                "id": "33333333-2222-4333-8444-555555555555",
                "pillar_id": "22222222-2222-4333-8444-555555555555",
                "title": "Walk",
                "position": 1
            }
        ]
    });

    let chart: Chart = serde_json::from_value(value).unwrap();
    assert!(chart.is_draft);
    assert_eq!(chart.pillars[0].color, PillarColor::Blue);
    assert_eq!(chart.tasks[0].status, TaskStatus::Todo);
    assert_eq!(chart.tasks[0].frequency, TaskFrequency::OneTime);
    assert_eq!(chart.tasks[0].description, "");
}

#[test]
fn deserialize_rejects_out_of_range_positions() {
    let value = serde_json::json!({
        "id": "22222222-2222-4333-8444-555555555555",
        "name": "Health",
        "position": 9
    });

    let err = serde_json::from_value::<Pillar>(value).unwrap_err();
    assert!(
        err.to_string().contains("ring position must be within 1..=8"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_unknown_status() {
    let value = serde_json::json!({
        "id": "33333333-2222-4333-8444-555555555555",
        "pillar_id": "22222222-2222-4333-8444-555555555555",
        "title": "Walk",
        "status": "cancelled",
        "position": 1
    });

    assert!(serde_json::from_value::<Task>(value).is_err());
}
