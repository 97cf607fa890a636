use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::{
    appointment::{Appointment, Summary},
    error::{Error, Result},
    lifecycle::Status,
    model::{AppointmentId, ScheduledDate, VehicleNumber},
    notify::Notifiable,
    service::Service,
};

/// Реестр записей сервисного центра.
///
/// Записи хранятся в порядке добавления и никогда не удаляются. Для одного
/// автомобиля на одну дату допускается не больше одной записи.
#[derive(Default)]
pub struct Registry {
    appointments: Mutex<Vec<Appointment>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Записывает автомобиль на обслуживание и уведомляет клиента.
    ///
    /// Проверка конфликта и добавление выполняются под одной блокировкой.
    /// При конфликте реестр не меняется.
    pub fn schedule(
        &self,
        client: Arc<dyn Notifiable>,
        vehicle_number: VehicleNumber,
        service: Service,
        date: ScheduledDate,
    ) -> Result<AppointmentId> {
        let id = {
            let mut appointments = self.lock();

            if appointments
                .iter()
                .any(|a| a.conflicts_with(&vehicle_number, &date))
            {
                debug!("Конфликт записи: {} на {}", vehicle_number, date);

                return Err(Error::SchedulingConflict {
                    vehicle: vehicle_number.into(),
                    date: date.into(),
                });
            }

            let id = AppointmentId::new(appointments.len() + 1);

            appointments.push(Appointment::new(
                id,
                Arc::clone(&client),
                vehicle_number,
                service,
                date.clone(),
            ));

            debug!("Добавили запись {} для {}", id, client.name());

            id
        };

        client.notify(&format!("Appointment scheduled for {}", date));

        Ok(id)
    }

    /// Переводит запись на следующую стадию.
    /// Для завершённой записи ничего не делает.
    pub fn advance(&self, id: AppointmentId) -> Result<Status> {
        let mut appointments = self.lock();

        let appointment = id
            .index()
            .and_then(|idx| appointments.get_mut(idx))
            .ok_or(Error::NotFound(id))?;

        let before = appointment.status();
        if before.is_terminal() {
            debug!("Запись {} уже завершена", appointment.id());
        }

        let after = appointment.advance();

        debug!("Запись {}: {} -> {}", appointment.id(), before, after);

        Ok(after)
    }

    /// Возвращает снимок записи по её номеру.
    pub fn find(&self, id: AppointmentId) -> Result<Summary> {
        let appointments = self.lock();

        id.index()
            .and_then(|idx| appointments.get(idx))
            .map(Appointment::summary)
            .ok_or(Error::NotFound(id))
    }

    /// Возвращает снимок всех записей в порядке добавления.
    pub fn list(&self) -> Vec<Summary> {
        self.lock().iter().map(Appointment::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Ни одна операция не оставляет коллекцию наполовину изменённой, поэтому
    // после паники в другом потоке с ней можно продолжать работать.
    fn lock(&self) -> MutexGuard<'_, Vec<Appointment>> {
        self.appointments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
