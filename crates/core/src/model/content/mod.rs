pub mod block;
pub mod media;

pub use block::{BlockKind, ComparisonPanel, ContentBlock, DiagramNode, DiagramNodeKind};
pub use media::{ContentError, VideoUrl};
