//! Serialized shape of a course document.
//!
//! Mirrors the authoring format: one flat `section` object per block with
//! optional fields, discriminated by `type`. `mapping` turns it into the
//! closed `ContentBlock` sum type.

use course_core::model::ModuleId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub title: String,
    pub author: String,
    pub modules: Vec<ModuleRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    pub id: ModuleId,
    pub title: String,
    pub short_title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub sections: Vec<SectionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<QuizRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Text,
    List,
    Diagram,
    Comparison,
    Alert,
    Simulation,
    Video,
}

impl SectionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Text => "text",
            SectionKind::List => "list",
            SectionKind::Diagram => "diagram",
            SectionKind::Comparison => "comparison",
            SectionKind::Alert => "alert",
            SectionKind::Simulation => "simulation",
            SectionKind::Video => "video",
        }
    }
}

/// `content` is a paragraph for most kinds and a list of strings for `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    Text(String),
    Items(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<SectionContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram_nodes: Option<Vec<DiagramNodeRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_left: Option<ComparisonRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_right: Option<ComparisonRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl SectionRecord {
    #[must_use]
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            title: None,
            content: None,
            diagram_nodes: None,
            comparison_left: None,
            comparison_right: None,
            simulation_id: None,
            video_url: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramNodeKindRecord {
    Component,
    Network,
    Action,
    Threat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramNodeRecord {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: DiagramNodeKindRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub title: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub question: String,
    pub options: Vec<QuizOptionRecord>,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOptionRecord {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}
