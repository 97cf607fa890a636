use crate::model::AppointmentId;

pub type Result<T> = std::result::Result<T, Error>;

/// Ошибки, которые ядро отдаёт слою представления.
///
/// Ни одна из них не оставляет реестр в промежуточном состоянии: операция
/// либо применяется целиком, либо не применяется вовсе.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid service type \"{0}\", expected \"oil\" or \"engine\"")]
    InvalidServiceType(String),

    #[error("scheduling conflict: vehicle {vehicle} already has an appointment on {date}")]
    SchedulingConflict { vehicle: String, date: String },

    #[error("appointment {0} not found")]
    NotFound(AppointmentId),
}
