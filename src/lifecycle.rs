/// Стадия выполнения записи.
///
/// Движется только вперёд и ровно на один шаг за раз. `Completed`
/// поглощает все последующие переходы.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    std::hash::Hash,
    derive_more::Display,
    enum_iterator::Sequence,
)]
pub enum Status {
    #[default]
    #[display(fmt = "Scheduled")]
    Scheduled,
    #[display(fmt = "In Progress")]
    InProgress,
    #[display(fmt = "Completed")]
    Completed,
}

impl Status {
    /// Возвращает следующую стадию.
    pub fn next(self) -> Self {
        match self {
            Self::Scheduled => Self::InProgress,
            Self::InProgress | Self::Completed => Self::Completed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}
