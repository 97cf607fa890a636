use anyhow::anyhow;

use crate::newtype;

newtype!(VehicleNumber, String, vehicle_number_validate);

fn vehicle_number_validate(value: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        return Err(anyhow!("vehicle number shouldn't be empty"));
    }

    Ok(())
}

// Дата хранится как есть и сравнивается побайтово. Формат проверяет
// тот, кто её ввёл.
newtype!(ScheduledDate, String, scheduled_date_validate);

fn scheduled_date_validate(value: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        return Err(anyhow!("date shouldn't be empty"));
    }

    Ok(())
}

// Порядковый номер записи, начиная с единицы.
newtype!(AppointmentId, usize);

impl AppointmentId {
    /// Индекс записи в коллекции реестра.
    pub fn index(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}
