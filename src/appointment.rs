use std::{fmt::Display, sync::Arc};

use crate::{
    lifecycle::Status,
    model::{AppointmentId, ScheduledDate, VehicleNumber},
    notify::Notifiable,
    service::{Service, ServiceKind},
};

/// Запись на обслуживание одного автомобиля на одну дату.
pub struct Appointment {
    id: AppointmentId,
    client: Arc<dyn Notifiable>,
    vehicle_number: VehicleNumber,
    service: Service,
    scheduled_date: ScheduledDate,
    status: Status,
}

impl Appointment {
    pub fn new(
        id: AppointmentId,
        client: Arc<dyn Notifiable>,
        vehicle_number: VehicleNumber,
        service: Service,
        scheduled_date: ScheduledDate,
    ) -> Self {
        Self {
            id,
            client,
            vehicle_number,
            service,
            scheduled_date,
            status: Status::default(),
        }
    }

    pub fn id(&self) -> AppointmentId {
        self.id
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Переводит запись на следующую стадию и возвращает новую стадию.
    pub fn advance(&mut self) -> Status {
        self.status = self.status.next();
        self.status
    }

    /// Проверяет, занята ли уже эта дата для этого автомобиля.
    pub fn conflicts_with(&self, vehicle_number: &VehicleNumber, date: &ScheduledDate) -> bool {
        self.vehicle_number == *vehicle_number && self.scheduled_date == *date
    }

    /// Снимок записи для вывода.
    pub fn summary(&self) -> Summary {
        Summary {
            id: self.id,
            vehicle_number: self.vehicle_number.to_string(),
            client_name: self.client.name().to_owned(),
            service_kind: self.service.kind(),
            service_description: self.service.description(),
            parts: self.service.parts().iter().map(|p| p.to_string()).collect(),
            cost: self.service.cost(),
            scheduled_date: self.scheduled_date.to_string(),
            status: self.status,
        }
    }
}

/// Представление записи только для чтения.
/// Изменения в нём никак не отражаются на реестре.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub id: AppointmentId,
    pub vehicle_number: String,
    pub client_name: String,
    pub service_kind: ServiceKind,
    pub service_description: String,
    pub parts: Vec<String>,
    pub cost: f64,
    pub scheduled_date: String,
    pub status: Status,
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} ({}), {} on {} [{}]",
            self.id,
            self.vehicle_number,
            self.client_name,
            self.service_kind,
            self.scheduled_date,
            self.status
        )
    }
}
