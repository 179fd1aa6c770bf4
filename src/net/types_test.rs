use super::*;

// =============================================================
// Task board wire shape
// =============================================================

#[test]
fn task_board_deserializes_backend_shape() {
    let json = serde_json::json!({
        "columns": {
            "column-1": { "id": "column-1", "title": "To Do", "taskIds": ["t1", "t2"] },
            "column-2": { "id": "column-2", "title": "In Progress", "taskIds": [] }
        },
        "tasks": {
            "t1": {
                "id": "t1",
                "title": "Research competitors",
                "description": "Top five, with notes",
                "priority": "medium",
                "dueDate": "2026-06-15",
                "comments": 2,
                "attachments": 1
            },
            "t2": {
                "id": "t2",
                "title": "Create wireframes",
                "priority": "high",
                "dueDate": "2026-06-18"
            }
        },
        "columnOrder": ["column-1", "column-2"]
    });

    let board: TaskBoard = serde_json::from_value(json).expect("board should parse");
    assert_eq!(board.column_order, vec!["column-1", "column-2"]);
    assert_eq!(board.columns["column-1"].task_ids, vec!["t1", "t2"]);
    assert_eq!(board.tasks["t1"].priority, Priority::Medium);
    assert_eq!(board.tasks["t2"].priority, Priority::High);
    // Missing optional fields default.
    assert_eq!(board.tasks["t2"].description, "");
    assert_eq!(board.tasks["t2"].comments, 0);
}

#[test]
fn priority_round_trips_lowercase() {
    assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
    let p: Priority = serde_json::from_str("\"low\"").unwrap();
    assert_eq!(p, Priority::Low);
}

#[test]
fn column_tasks_skips_dangling_ids() {
    let json = serde_json::json!({
        "columns": {
            "column-1": { "id": "column-1", "title": "To Do", "taskIds": ["t1", "ghost"] }
        },
        "tasks": {
            "t1": { "id": "t1", "title": "A", "priority": "low", "dueDate": "2026-01-01" }
        },
        "columnOrder": ["column-1"]
    });
    let board: TaskBoard = serde_json::from_value(json).unwrap();
    let tasks = board.column_tasks("column-1");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, "t1");
}

// =============================================================
// Canvas items: tagged union over `type`
// =============================================================

#[test]
fn canvas_item_text_parses_with_style() {
    let json = serde_json::json!({
        "id": "i1",
        "type": "text",
        "content": "Project Ideas",
        "x": 100.0,
        "y": 50.0,
        "width": 200.0,
        "height": 50.0,
        "style": { "fontSize": "24px", "fontWeight": "bold", "colorClass": "text-foreground" }
    });
    let item: CanvasItem = serde_json::from_value(json).unwrap();
    match &item.body {
        ItemBody::Text { content, style } => {
            assert_eq!(content, "Project Ideas");
            assert_eq!(style.font_size.as_deref(), Some("24px"));
        }
        other => panic!("expected text item, got {other:?}"),
    }
}

#[test]
fn canvas_item_image_ignores_empty_style_bag() {
    let json = serde_json::json!({
        "id": "i2",
        "type": "image",
        "content": "data:image/png;base64,AAAA",
        "x": 0.0, "y": 0.0, "width": 200.0, "height": 150.0,
        "style": {}
    });
    let item: CanvasItem = serde_json::from_value(json).unwrap();
    assert!(matches!(item.body, ItemBody::Image { .. }));
}

#[test]
fn canvas_item_create_payload_omits_id() {
    let item = CanvasItem {
        id: None,
        body: ItemBody::Note {
            content: "New note".to_owned(),
            style: NoteStyle {
                background_class: Some("bg-note".to_owned()),
                padding: Some("10px".to_owned()),
                border_radius: Some("4px".to_owned()),
            },
        },
        x: 200.0,
        y: 200.0,
        width: 200.0,
        height: 100.0,
    };
    let value = serde_json::to_value(&item).unwrap();
    assert!(value.get("id").is_none());
    assert_eq!(value["type"], "note");
    assert_eq!(value["style"]["backgroundClass"], "bg-note");
}

#[test]
fn item_body_content_accessors_cover_all_kinds() {
    let mut body = ItemBody::Text { content: "a".to_owned(), style: TextStyle::default() };
    body.set_content("b".to_owned());
    assert_eq!(body.content(), "b");
    assert!(body.editable());

    let image = ItemBody::Image { content: "/placeholder.svg".to_owned() };
    assert!(!image.editable());
}

// =============================================================
// Timeline / dashboard
// =============================================================

#[test]
fn timeline_data_parses_progress_map() {
    let json = serde_json::json!({
        "projects": [{
            "id": "p1",
            "name": "Website",
            "color": "bg-teal-500",
            "tasks": [{ "id": "tt1", "name": "Design", "startDay": "2026-03-02", "duration": 3, "completed": false }]
        }],
        "upcomingMilestones": [{ "name": "Beta", "project": "Website", "date": "2026-04-01" }],
        "projectProgress": { "p1": 40.0 }
    });
    let data: TimelineData = serde_json::from_value(json).unwrap();
    assert_eq!(data.projects[0].tasks[0].duration, 3);
    assert_eq!(data.project_progress["p1"], 40.0);
}

#[test]
fn dashboard_summary_tolerates_missing_lists() {
    let json = serde_json::json!({
        "userName": "Ada",
        "taskCount": 4,
        "taskProgress": 25.0,
        "projectCount": 2,
        "projectProgress": 60.0,
        "ideaCount": 7,
        "newIdeasSinceYesterday": 1
    });
    let summary: DashboardSummary = serde_json::from_value(json).unwrap();
    assert_eq!(summary.user_name, "Ada");
    assert!(summary.recent_activities.is_empty());
    assert!(summary.weekly_productivity.is_empty());
}
