use std::fmt;

use crate::model::content::VideoUrl;

//
// ─── DIAGRAM / COMPARISON PARTS ────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramNodeKind {
    Component,
    Network,
    Action,
    Threat,
}

impl DiagramNodeKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DiagramNodeKind::Component => "component",
            DiagramNodeKind::Network => "network",
            DiagramNodeKind::Action => "action",
            DiagramNodeKind::Threat => "threat",
        }
    }
}

/// One box in a left-to-right flow diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    pub label: String,
    pub kind: DiagramNodeKind,
    pub description: Option<String>,
}

impl DiagramNode {
    #[must_use]
    pub fn new(label: impl Into<String>, kind: DiagramNodeKind) -> Self {
        Self {
            label: label.into(),
            kind,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPanel {
    pub title: String,
    pub points: Vec<String>,
}

impl ComparisonPanel {
    #[must_use]
    pub fn new(title: impl Into<String>, points: Vec<String>) -> Self {
        Self {
            title: title.into(),
            points,
        }
    }
}

//
// ─── CONTENT BLOCK ─────────────────────────────────────────────────────────────
//

/// A single piece of module content.
///
/// Each variant carries only the fields its kind needs. Only a `Video` with a
/// locator takes part in progression (watch tracking); every other block,
/// including a video without one, is display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Text {
        title: Option<String>,
        body: String,
    },
    List {
        title: Option<String>,
        items: Vec<String>,
    },
    Diagram {
        title: Option<String>,
        caption: Option<String>,
        nodes: Vec<DiagramNode>,
    },
    Comparison {
        title: Option<String>,
        left: ComparisonPanel,
        right: ComparisonPanel,
    },
    Alert {
        title: Option<String>,
        body: String,
    },
    Simulation {
        title: Option<String>,
        caption: Option<String>,
    },
    Video {
        title: Option<String>,
        url: Option<VideoUrl>,
        caption: Option<String>,
    },
}

/// Discriminant of `ContentBlock`, handy for logs and document mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Text,
    List,
    Diagram,
    Comparison,
    Alert,
    Simulation,
    Video,
}

impl BlockKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::List => "list",
            BlockKind::Diagram => "diagram",
            BlockKind::Comparison => "comparison",
            BlockKind::Alert => "alert",
            BlockKind::Simulation => "simulation",
            BlockKind::Video => "video",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ContentBlock {
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text {
            title: None,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn video(url: VideoUrl) -> Self {
        Self::Video {
            title: None,
            url: Some(url),
            caption: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::Text { .. } => BlockKind::Text,
            ContentBlock::List { .. } => BlockKind::List,
            ContentBlock::Diagram { .. } => BlockKind::Diagram,
            ContentBlock::Comparison { .. } => BlockKind::Comparison,
            ContentBlock::Alert { .. } => BlockKind::Alert,
            ContentBlock::Simulation { .. } => BlockKind::Simulation,
            ContentBlock::Video { .. } => BlockKind::Video,
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { title, .. }
            | ContentBlock::List { title, .. }
            | ContentBlock::Diagram { title, .. }
            | ContentBlock::Comparison { title, .. }
            | ContentBlock::Alert { title, .. }
            | ContentBlock::Simulation { title, .. }
            | ContentBlock::Video { title, .. } => title.as_deref(),
        }
    }

    /// The tracked locator of a video block; `None` for every other kind.
    #[must_use]
    pub fn video_url(&self) -> Option<&VideoUrl> {
        match self {
            ContentBlock::Video { url, .. } => url.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_video_blocks_expose_a_locator() {
        let video = ContentBlock::video(VideoUrl::new_unchecked("v1"));
        let text = ContentBlock::text("hello");

        assert_eq!(video.video_url().map(VideoUrl::as_str), Some("v1"));
        assert_eq!(text.video_url(), None);
    }

    #[test]
    fn video_without_locator_is_not_tracked() {
        let placeholder = ContentBlock::Video {
            title: Some("Coming soon".into()),
            url: None,
            caption: None,
        };
        assert_eq!(placeholder.kind(), BlockKind::Video);
        assert_eq!(placeholder.video_url(), None);
    }

    #[test]
    fn kind_matches_variant() {
        let block = ContentBlock::Simulation {
            title: Some("Attack Simulation".into()),
            caption: None,
        };
        assert_eq!(block.kind(), BlockKind::Simulation);
        assert_eq!(block.kind().to_string(), "simulation");
        assert_eq!(block.title(), Some("Attack Simulation"));
    }
}
