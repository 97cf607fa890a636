use std::{fs, io, path::Path, sync::Arc};

use log::{debug, info};
use serde::Deserialize;

use crate::{
    cli,
    config::Config,
    model::{AppointmentId, ScheduledDate, VehicleNumber},
    notify::{Client, Notifiable},
    registry::Registry,
    service::{Service, ServiceKind},
};

/// Один шаг сценария.
#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Записать автомобиль на обслуживание.
    Schedule(ScheduleStep),

    /// Перевести запись на следующую стадию.
    Advance(AppointmentId),

    /// Вывести все записи.
    List,
}

/// Данные для записи в том виде, в каком их ввёл бы оператор.
#[derive(Deserialize, Debug, PartialEq)]
pub struct ScheduleStep {
    pub client: String,

    #[serde(default)]
    pub contact: String,

    pub vehicle: String,

    pub date: String,

    /// Тег услуги: "oil" или "engine".
    pub service: String,

    #[serde(default)]
    pub repair_type: String,
}

/// Итог прогона сценария.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub applied: usize,
    pub failed: usize,
}

/// Загружает сценарий из указанного файла.
pub fn load(path: &Path) -> LoadResult {
    let content = fs::read_to_string(path)?;

    let steps: Vec<Step> = serde_json::from_str(&content)?;

    Ok(steps)
}

pub type LoadResult = std::result::Result<Vec<Step>, LoadError>;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("read script file")]
    ReadFile(#[from] io::Error),

    #[error("deserialize script")]
    Deserialize(#[from] serde_json::Error),
}

/// Применяет шаги сценария по порядку.
/// Ошибка в шаге выводится и не мешает выполнению остальных.
pub fn run(cfg: &Config, registry: &Registry, steps: &[Step]) -> Report {
    let mut report = Report::default();

    for (n, step) in steps.iter().enumerate() {
        debug!("Шаг {}: {:?}", n + 1, step);

        match apply(cfg, registry, step) {
            Ok(()) => report.applied += 1,
            Err(e) => {
                eprintln!("Error: {}", e);
                report.failed += 1;
            }
        }
    }

    info!(
        "Сценарий выполнен: успешно {}, с ошибкой {}",
        report.applied, report.failed
    );

    report
}

fn apply(cfg: &Config, registry: &Registry, step: &Step) -> anyhow::Result<()> {
    match step {
        Step::Schedule(s) => {
            let kind: ServiceKind = s.service.parse()?;

            if cfg.strict_dates {
                cli::check_date_format(&s.date)?;
            }

            let client: Arc<dyn Notifiable> =
                Arc::new(Client::new(s.client.trim(), s.contact.trim()));

            registry.schedule(
                client,
                VehicleNumber::new(&s.vehicle)?,
                Service::new(kind, &s.repair_type),
                ScheduledDate::new(&s.date)?,
            )?;

            println!("Appointment scheduled successfully!");
        }
        Step::Advance(id) => {
            let status = registry.advance(*id)?;
            let appointment = registry.find(*id)?;

            println!(
                "Appointment #{} ({}) is now {}",
                id, appointment.vehicle_number, status
            );
        }
        Step::List => {
            print!("{}", cli::render(cfg, &registry.list()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Status;

    fn steps(json: &str) -> Vec<Step> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parse_steps() {
        let actual = steps(
            r#"[
                {"schedule": {"client": "Alice", "vehicle": "KA01", "date": "01-01-2025", "service": "engine", "repair_type": "Turbo"}},
                {"advance": 1},
                "list"
            ]"#,
        );

        let expected = vec![
            Step::Schedule(ScheduleStep {
                client: "Alice".to_owned(),
                contact: String::new(),
                vehicle: "KA01".to_owned(),
                date: "01-01-2025".to_owned(),
                service: "engine".to_owned(),
                repair_type: "Turbo".to_owned(),
            }),
            Step::Advance(AppointmentId::new(1)),
            Step::List,
        ];

        assert_eq!(expected, actual);
    }

    #[test]
    fn parse_unknown_step() {
        assert!(serde_json::from_str::<Vec<Step>>(r#"["cancel"]"#).is_err());
    }

    #[test]
    fn conflict_scenario() {
        let registry = Registry::new();
        let script = steps(
            r#"[
                {"schedule": {"client": "Alice", "vehicle": "KA01AB1234", "date": "01-01-2025", "service": "oil"}},
                {"schedule": {"client": "Bob", "vehicle": "KA01AB1234", "date": "01-01-2025", "service": "oil"}},
                {"schedule": {"client": "Alice", "vehicle": "KA01AB1234", "date": "02-01-2025", "service": "oil"}}
            ]"#,
        );

        let report = run(&Config::default(), &registry, &script);

        assert_eq!(Report { applied: 2, failed: 1 }, report);
        assert_eq!(2, registry.len());
    }

    #[test]
    fn invalid_service_never_reaches_registry() {
        let registry = Registry::new();
        let script = steps(
            r#"[{"schedule": {"client": "Alice", "vehicle": "KA01", "date": "01-01-2025", "service": "wash"}}]"#,
        );

        let report = run(&Config::default(), &registry, &script);

        assert_eq!(1, report.failed);
        assert!(registry.is_empty());
    }

    #[test]
    fn strict_dates_toggle() {
        let script = steps(
            r#"[{"schedule": {"client": "Alice", "vehicle": "KA01", "date": "someday", "service": "oil"}}]"#,
        );

        let strict = Registry::new();
        run(&Config::default(), &strict, &script);
        assert!(strict.is_empty());

        let relaxed = Registry::new();
        let cfg = Config {
            strict_dates: false,
            ..Config::default()
        };
        run(&cfg, &relaxed, &script);
        assert_eq!("someday", relaxed.list()[0].scheduled_date);
    }

    #[test]
    fn advance_scenario() {
        let registry = Registry::new();
        let script = steps(
            r#"[
                {"schedule": {"client": "Alice", "vehicle": "KA01", "date": "01-01-2025", "service": "oil"}},
                {"advance": 1},
                {"advance": 1},
                {"advance": 1},
                {"advance": 2},
                "list"
            ]"#,
        );

        let report = run(&Config::default(), &registry, &script);

        assert_eq!(Report { applied: 5, failed: 1 }, report);
        assert_eq!(Status::Completed, registry.list()[0].status);
    }
}
