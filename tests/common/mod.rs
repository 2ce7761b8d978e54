//! Shared fixtures for the paralink integration tests
//!
//! Builds small record collections the way the record adapters deliver
//! them: loosely-typed JSON objects, one array per kind.

#![allow(dead_code)]

use paralink::{build_graph, GraphSnapshot, NodeKind, SourceCollections};
use serde_json::{json, Value};

/// The goal/project scenario: G → {P1, P2}, P1 → {T1, N1}
pub fn goal_scenario() -> SourceCollections {
    SourceCollections::new()
        .with(
            NodeKind::Goal,
            vec![json!({"id": "G", "title": "Ship v2", "status": "active", "projects": ["P1", "P2"]})],
        )
        .with(
            NodeKind::Project,
            vec![
                json!({"id": "P1", "title": "Backend", "status": "active", "tasks": ["T1"], "notes": ["N1"]}),
                json!({"id": "P2", "title": "Docs", "status": "planned"}),
            ],
        )
        .with(
            NodeKind::Task,
            vec![json!({"id": "T1", "title": "Migrate schema", "status": "todo"})],
        )
        .with(
            NodeKind::Note,
            vec![json!({"id": "N1", "title": "Schema notes", "type": "resource"})],
        )
}

/// A denser, realistic dump touching every kind and relation field
pub fn workspace() -> SourceCollections {
    serde_json::from_value(workspace_json()).expect("fixture is valid")
}

pub fn workspace_json() -> Value {
    json!({
        "projects": [
            {"id": "proj-home", "title": "Home renovation", "status": "active",
             "tasks": ["task-paint", "task-floor", "task-quote"], "notes": ["note-colors"],
             "people": ["person-sam"]},
            {"id": "proj-book", "title": "Write a book", "status": "someday",
             "tasks": ["task-outline"], "notes": ["note-ideas", "note-missing"], "people": []},
            {"id": "proj-site", "title": "Personal site", "status": "done"}
        ],
        "tasks": [
            {"id": "task-paint", "title": "Paint living room", "status": "todo",
             "notes": ["note-colors"], "project": "proj-home"},
            {"id": "task-floor", "title": "Sand the floor", "status": "blocked", "project": "proj-home"},
            {"id": "task-quote", "title": "Get contractor quote", "status": "done",
             "project": {"id": "proj-home"}},
            {"id": "task-outline", "title": "Outline chapters", "status": "todo",
             "project": "proj-book"}
        ],
        "notes": [
            {"id": "note-colors", "title": "Color palette", "type": "reference",
             "tasks": ["task-paint"], "project": "proj-home", "people": ["person-sam"]},
            {"id": "note-ideas", "title": "Book ideas", "type": "journal", "project": "proj-book"}
        ],
        "people": [
            {"id": "person-sam", "firstName": "Sam", "lastName": "Okafor", "relationship": "contractor",
             "projects": ["proj-home"], "tasks": ["task-floor", "task-quote"], "notes": []}
        ],
        "goals": [
            {"id": "goal-home", "title": "Comfortable home", "status": "active",
             "projects": ["proj-home"], "habits": ["habit-tidy"]}
        ],
        "habits": [
            {"id": "habit-tidy", "title": "Tidy for 10 minutes", "isActive": true, "goal": "goal-home"},
            {"id": "habit-old", "title": "Project journaling", "isActive": false}
        ]
    })
}

pub fn build(collections: &SourceCollections) -> GraphSnapshot {
    build_graph(collections)
}

pub fn ids<'a>(nodes: impl IntoIterator<Item = &'a paralink::Node>) -> Vec<String> {
    nodes.into_iter().map(|n| n.id.to_string()).collect()
}
