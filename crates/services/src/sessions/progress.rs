/// Aggregated view of course progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseProgress {
    pub total: usize,
    pub completed: usize,
    pub current: usize,
    pub percent: u8,
    pub is_finished: bool,
}
