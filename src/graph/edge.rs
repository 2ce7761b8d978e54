//! Typed, weighted edges between nodes

use super::node::{NodeId, NodeKind};
use serde::{Deserialize, Serialize};

/// Weight carried by ordinary references
pub const DEFAULT_WEIGHT: u32 = 1;

/// Weight carried by goal → project references; goals anchor projects
pub const GOAL_PROJECT_WEIGHT: u32 = 2;

/// Semantic tag of an edge, fixed by the (source kind, field) pair it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    ProjectTask,
    ProjectNote,
    ProjectPerson,
    TaskNote,
    TaskProject,
    NoteTask,
    NoteProject,
    NotePerson,
    PersonProject,
    PersonTask,
    PersonNote,
    GoalProject,
    GoalHabit,
    HabitGoal,
}

impl EdgeKind {
    /// Kind of the node owning the reference
    pub fn source_kind(&self) -> NodeKind {
        match self {
            EdgeKind::ProjectTask | EdgeKind::ProjectNote | EdgeKind::ProjectPerson => {
                NodeKind::Project
            }
            EdgeKind::TaskNote | EdgeKind::TaskProject => NodeKind::Task,
            EdgeKind::NoteTask | EdgeKind::NoteProject | EdgeKind::NotePerson => NodeKind::Note,
            EdgeKind::PersonProject | EdgeKind::PersonTask | EdgeKind::PersonNote => {
                NodeKind::Person
            }
            EdgeKind::GoalProject | EdgeKind::GoalHabit => NodeKind::Goal,
            EdgeKind::HabitGoal => NodeKind::Habit,
        }
    }

    /// Ranking weight of edges of this kind
    pub fn weight(&self) -> u32 {
        match self {
            EdgeKind::GoalProject => GOAL_PROJECT_WEIGHT,
            _ => DEFAULT_WEIGHT,
        }
    }
}

/// A directed reference from one record to another
///
/// `to` is not guaranteed to name a node in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Node owning the reference
    pub from: NodeId,
    /// Referenced id
    pub to: NodeId,
    /// Semantic tag
    pub relation: EdgeKind,
    /// Ranking weight, at least 1
    pub weight: u32,
}

impl Edge {
    /// Create an edge, taking its weight from the relation
    pub fn new(from: NodeId, to: NodeId, relation: EdgeKind) -> Self {
        Self {
            from,
            to,
            relation,
            weight: relation.weight(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_project_edges_weigh_two() {
        let edge = Edge::new("g1".into(), "p1".into(), EdgeKind::GoalProject);
        assert_eq!(edge.weight, 2);
    }

    #[test]
    fn other_edges_weigh_one() {
        let edge = Edge::new("g1".into(), "h1".into(), EdgeKind::GoalHabit);
        assert_eq!(edge.weight, 1);
        let edge = Edge::new("t1".into(), "p1".into(), EdgeKind::TaskProject);
        assert_eq!(edge.weight, 1);
    }

    #[test]
    fn relation_owner_follows_its_name() {
        assert_eq!(EdgeKind::NotePerson.source_kind(), NodeKind::Note);
        assert_eq!(EdgeKind::HabitGoal.source_kind(), NodeKind::Habit);
    }

    #[test]
    fn relation_serializes_snake_case() {
        let json = serde_json::to_string(&EdgeKind::ProjectPerson).unwrap();
        assert_eq!(json, "\"project_person\"");
    }
}
