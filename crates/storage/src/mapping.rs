use course_core::model::{
    ComparisonPanel, ContentBlock, ContentError, Course, DiagramNode, DiagramNodeKind, Module,
    Quiz, QuizOption, VideoUrl,
};

use crate::document::{
    ComparisonRecord, CourseRecord, DiagramNodeKindRecord, DiagramNodeRecord, ModuleRecord,
    QuizOptionRecord, QuizRecord, SectionContent, SectionKind, SectionRecord,
};
use crate::source::StorageError;

impl CourseRecord {
    /// Convert the document into a domain `Course`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidSection` when a section lacks a field its
    /// kind requires, and `StorageError::Domain` when the course structure is invalid.
    pub fn into_course(self) -> Result<Course, StorageError> {
        let modules = self
            .modules
            .into_iter()
            .map(ModuleRecord::into_module)
            .collect::<Result<Vec<_>, _>>()?;

        Course::new(self.title, self.author, modules)
            .map_err(course_core::Error::from)
            .map_err(StorageError::from)
    }

    #[must_use]
    pub fn from_course(course: &Course) -> Self {
        Self {
            title: course.title().to_string(),
            author: course.author().to_string(),
            modules: course.modules().iter().map(ModuleRecord::from_module).collect(),
        }
    }
}

impl ModuleRecord {
    fn into_module(self) -> Result<Module, StorageError> {
        let mut blocks = Vec::with_capacity(self.sections.len());
        for (position, section) in self.sections.into_iter().enumerate() {
            let block = section
                .into_block()
                .map_err(|source| StorageError::InvalidSection {
                    module: self.id.to_string(),
                    position,
                    source,
                })?;
            blocks.push(block);
        }

        Ok(Module {
            id: self.id,
            title: self.title,
            short_title: self.short_title,
            duration: self.duration,
            blocks,
            quiz: self.quiz.map(QuizRecord::into_quiz),
        })
    }

    fn from_module(module: &Module) -> Self {
        Self {
            id: module.id.clone(),
            title: module.title.clone(),
            short_title: module.short_title.clone(),
            duration: module.duration.clone(),
            sections: module.blocks.iter().map(SectionRecord::from_block).collect(),
            quiz: module.quiz.as_ref().map(QuizRecord::from_quiz),
        }
    }
}

fn missing(kind: SectionKind, field: &'static str) -> ContentError {
    ContentError::MissingField {
        kind: kind.as_str(),
        field,
    }
}

impl SectionRecord {
    fn text_content(&mut self) -> Option<String> {
        match self.content.take() {
            Some(SectionContent::Text(text)) => Some(text),
            Some(SectionContent::Items(items)) => Some(items.join("\n")),
            None => None,
        }
    }

    fn into_block(mut self) -> Result<ContentBlock, ContentError> {
        let kind = self.kind;
        let block = match kind {
            SectionKind::Text => ContentBlock::Text {
                body: self
                    .text_content()
                    .ok_or_else(|| missing(kind, "content"))?,
                title: self.title,
            },
            SectionKind::Alert => ContentBlock::Alert {
                body: self
                    .text_content()
                    .ok_or_else(|| missing(kind, "content"))?,
                title: self.title,
            },
            SectionKind::List => {
                let items = match self.content.take() {
                    Some(SectionContent::Items(items)) => items,
                    _ => return Err(missing(kind, "a list of strings as content")),
                };
                ContentBlock::List {
                    title: self.title,
                    items,
                }
            }
            SectionKind::Diagram => {
                let caption = self.text_content();
                let nodes = self
                    .diagram_nodes
                    .ok_or_else(|| missing(kind, "diagramNodes"))?
                    .into_iter()
                    .map(DiagramNodeRecord::into_node)
                    .collect();
                ContentBlock::Diagram {
                    title: self.title,
                    caption,
                    nodes,
                }
            }
            SectionKind::Comparison => {
                let left = self
                    .comparison_left
                    .ok_or_else(|| missing(kind, "comparisonLeft"))?;
                let right = self
                    .comparison_right
                    .ok_or_else(|| missing(kind, "comparisonRight"))?;
                ContentBlock::Comparison {
                    title: self.title,
                    left: ComparisonPanel::new(left.title, left.points),
                    right: ComparisonPanel::new(right.title, right.points),
                }
            }
            SectionKind::Simulation => ContentBlock::Simulation {
                caption: self.text_content(),
                title: self.title,
            },
            // Without a locator the block is shown but never gates progress.
            SectionKind::Video => {
                let url = self
                    .video_url
                    .take()
                    .filter(|raw| !raw.trim().is_empty())
                    .map(VideoUrl::parse)
                    .transpose()?;
                ContentBlock::Video {
                    url,
                    caption: self.text_content(),
                    title: self.title,
                }
            }
        };
        Ok(block)
    }

    fn from_block(block: &ContentBlock) -> Self {
        match block {
            ContentBlock::Text { title, body } => Self {
                title: title.clone(),
                content: Some(SectionContent::Text(body.clone())),
                ..Self::new(SectionKind::Text)
            },
            ContentBlock::Alert { title, body } => Self {
                title: title.clone(),
                content: Some(SectionContent::Text(body.clone())),
                ..Self::new(SectionKind::Alert)
            },
            ContentBlock::List { title, items } => Self {
                title: title.clone(),
                content: Some(SectionContent::Items(items.clone())),
                ..Self::new(SectionKind::List)
            },
            ContentBlock::Diagram {
                title,
                caption,
                nodes,
            } => Self {
                title: title.clone(),
                content: caption.clone().map(SectionContent::Text),
                diagram_nodes: Some(nodes.iter().map(DiagramNodeRecord::from_node).collect()),
                ..Self::new(SectionKind::Diagram)
            },
            ContentBlock::Comparison { title, left, right } => Self {
                title: title.clone(),
                comparison_left: Some(ComparisonRecord {
                    title: left.title.clone(),
                    points: left.points.clone(),
                }),
                comparison_right: Some(ComparisonRecord {
                    title: right.title.clone(),
                    points: right.points.clone(),
                }),
                ..Self::new(SectionKind::Comparison)
            },
            ContentBlock::Simulation { title, caption } => Self {
                title: title.clone(),
                content: caption.clone().map(SectionContent::Text),
                ..Self::new(SectionKind::Simulation)
            },
            ContentBlock::Video {
                title,
                url,
                caption,
            } => Self {
                title: title.clone(),
                content: caption.clone().map(SectionContent::Text),
                video_url: url.as_ref().map(|url| url.as_str().to_string()),
                ..Self::new(SectionKind::Video)
            },
        }
    }
}

impl DiagramNodeRecord {
    fn into_node(self) -> DiagramNode {
        let kind = match self.kind {
            DiagramNodeKindRecord::Component => DiagramNodeKind::Component,
            DiagramNodeKindRecord::Network => DiagramNodeKind::Network,
            DiagramNodeKindRecord::Action => DiagramNodeKind::Action,
            DiagramNodeKindRecord::Threat => DiagramNodeKind::Threat,
        };
        DiagramNode {
            label: self.label,
            kind,
            description: self.description,
        }
    }

    fn from_node(node: &DiagramNode) -> Self {
        let kind = match node.kind {
            DiagramNodeKind::Component => DiagramNodeKindRecord::Component,
            DiagramNodeKind::Network => DiagramNodeKindRecord::Network,
            DiagramNodeKind::Action => DiagramNodeKindRecord::Action,
            DiagramNodeKind::Threat => DiagramNodeKindRecord::Threat,
        };
        Self {
            label: node.label.clone(),
            kind,
            description: node.description.clone(),
        }
    }
}

impl QuizRecord {
    fn into_quiz(self) -> Quiz {
        Quiz::new(
            self.question,
            self.options
                .into_iter()
                .map(|option| QuizOption::new(option.id, option.text, option.is_correct))
                .collect(),
            self.explanation,
        )
    }

    fn from_quiz(quiz: &Quiz) -> Self {
        Self {
            question: quiz.question.clone(),
            options: quiz
                .options
                .iter()
                .map(|option| QuizOptionRecord {
                    id: option.id.clone(),
                    text: option.text.clone(),
                    is_correct: option.is_correct,
                })
                .collect(),
            explanation: quiz.explanation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(json: &str) -> SectionRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn list_section_requires_items() {
        let err = section(r#"{"type":"list","content":"not a list"}"#)
            .into_block()
            .unwrap_err();
        assert!(matches!(err, ContentError::MissingField { kind: "list", .. }));
    }

    #[test]
    fn video_section_without_locator_is_display_only() {
        for json in [
            r#"{"type":"video","title":"Coming soon"}"#,
            r#"{"type":"video","title":"Coming soon","videoUrl":"  "}"#,
        ] {
            let block = section(json).into_block().unwrap();
            assert_eq!(
                block,
                ContentBlock::Video {
                    title: Some("Coming soon".into()),
                    url: None,
                    caption: None
                }
            );
        }
    }

    #[test]
    fn video_section_keeps_relative_locator() {
        let block = section(r#"{"type":"video","videoUrl":"videos/intro.mp4"}"#)
            .into_block()
            .unwrap();
        assert_eq!(
            block.video_url().map(VideoUrl::as_str),
            Some("videos/intro.mp4")
        );
    }

    #[test]
    fn video_section_keeps_caption() {
        let block = section(
            r#"{"type":"video","videoUrl":"https://example.com/v","content":"Watch this"}"#,
        )
        .into_block()
        .unwrap();
        match block {
            ContentBlock::Video { url, caption, .. } => {
                assert_eq!(url.unwrap().as_str(), "https://example.com/v");
                assert_eq!(caption.as_deref(), Some("Watch this"));
            }
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn diagram_section_maps_node_kinds() {
        let block = section(
            r#"{"type":"diagram","content":"flow","diagramNodes":[{"label":"Gateway","type":"network"}]}"#,
        )
        .into_block()
        .unwrap();
        match block {
            ContentBlock::Diagram { caption, nodes, .. } => {
                assert_eq!(caption.as_deref(), Some("flow"));
                assert_eq!(nodes[0].kind, DiagramNodeKind::Network);
                assert_eq!(nodes[0].description, None);
            }
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn simulation_section_needs_no_fields() {
        let block = section(r#"{"type":"simulation"}"#).into_block().unwrap();
        assert_eq!(
            block,
            ContentBlock::Simulation {
                title: None,
                caption: None
            }
        );
    }
}
