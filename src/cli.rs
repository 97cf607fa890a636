use std::sync::Arc;

use anyhow::anyhow;
use chrono::NaiveDate;
use enum_iterator::all;
use inquire::{validator::Validation, DateSelect, InquireError, Select, Text};
use log::debug;

use crate::{
    appointment::Summary,
    config::Config,
    model::{ScheduledDate, VehicleNumber},
    notify::{Client, Notifiable},
    registry::Registry,
    service::{Service, ServiceKind},
};

/// Формат даты записи.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Пункты главного меню.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, enum_iterator::Sequence)]
enum MenuItem {
    #[display(fmt = "Schedule New Appointment")]
    Schedule,
    #[display(fmt = "View Appointments")]
    View,
    #[display(fmt = "Advance Appointment Status")]
    Advance,
    #[display(fmt = "Exit")]
    Exit,
}

/// Запускает интерактивную сессию.
///
/// Ошибки отдельных действий выводятся пользователю и не прерывают сессию.
/// Отмена в главном меню (Esc или Ctrl-C) завершает работу.
pub fn run(cfg: &Config, registry: &Registry) -> anyhow::Result<()> {
    loop {
        let item = match Select::new(&cfg.center_name, all::<MenuItem>().collect()).prompt() {
            Ok(item) => item,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                MenuItem::Exit
            }
            Err(e) => return Err(e.into()),
        };

        debug!("Выбран пункт меню {:?}", item);

        let res = match item {
            MenuItem::Schedule => schedule(cfg, registry),
            MenuItem::View => {
                print!("{}", render(cfg, &registry.list()));
                Ok(())
            }
            MenuItem::Advance => advance(registry),
            MenuItem::Exit => {
                println!("Exiting system...");
                return Ok(());
            }
        };

        if let Err(e) = res {
            eprintln!("Error: {}", e);
        }
    }
}

fn schedule(cfg: &Config, registry: &Registry) -> anyhow::Result<()> {
    let name = ask_required("Client name")?;
    let contact = ask_required("Contact number")?;
    let vehicle = ask_required("Vehicle number")?;
    let date = ask_date(cfg)?;

    let tags = all::<ServiceKind>()
        .map(|k| k.tag())
        .collect::<Vec<_>>()
        .join(" or ");

    let kind: ServiceKind = Text::new("Service type")
        .with_help_message(&tags)
        .prompt()?
        .parse()?;

    let repair_type = match kind {
        ServiceKind::EngineRepair => ask_required("Engine repair type")?,
        ServiceKind::OilChange => String::new(),
    };

    let client: Arc<dyn Notifiable> = Arc::new(Client::new(name.trim(), contact.trim()));

    registry.schedule(
        client,
        VehicleNumber::new(&vehicle)?,
        Service::new(kind, &repair_type),
        ScheduledDate::new(&date)?,
    )?;

    println!("Appointment scheduled successfully!");

    Ok(())
}

fn advance(registry: &Registry) -> anyhow::Result<()> {
    if registry.is_empty() {
        println!("No appointments scheduled.");
        return Ok(());
    }

    let chosen = Select::new("Appointment", registry.list()).prompt()?;

    let status = registry.advance(chosen.id)?;

    println!(
        "Appointment #{} ({}) is now {}",
        chosen.id, chosen.vehicle_number, status
    );

    Ok(())
}

fn ask_required(title: &str) -> anyhow::Result<String> {
    let val = Text::new(title)
        .with_validator(|s: &str| {
            if s.trim().is_empty() {
                return Ok(Validation::Invalid("required".into()));
            };
            Ok(Validation::Valid)
        })
        .prompt()?;

    Ok(val)
}

fn ask_date(cfg: &Config) -> anyhow::Result<String> {
    const TITLE: &str = "Appointment date";

    if cfg.date_picker {
        let date = DateSelect::new(TITLE).prompt()?;
        return Ok(date.format(DATE_FORMAT).to_string());
    }

    let mut prompt = Text::new(TITLE).with_help_message("DD-MM-YYYY");

    prompt = if cfg.strict_dates {
        prompt.with_validator(|s: &str| match check_date_format(s) {
            Ok(()) => Ok(Validation::Valid),
            Err(e) => Ok(Validation::Invalid(e.to_string().into())),
        })
    } else {
        prompt.with_validator(|s: &str| {
            if s.trim().is_empty() {
                return Ok(Validation::Invalid("required".into()));
            };
            Ok(Validation::Valid)
        })
    };

    Ok(prompt.prompt()?)
}

/// Проверяет что дата записана как DD-MM-YYYY и такой день существует.
pub fn check_date_format(value: &str) -> anyhow::Result<()> {
    let value = value.trim();

    if value.len() != 10 {
        return Err(anyhow!("date \"{}\" should look like DD-MM-YYYY", value));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| anyhow!("date \"{}\" is not a valid DD-MM-YYYY date: {}", value, e))?;

    Ok(())
}

/// Готовит список записей к выводу.
pub fn render(cfg: &Config, appointments: &[Summary]) -> String {
    if appointments.is_empty() {
        return "No appointments scheduled.\n".to_owned();
    }

    appointments
        .iter()
        .map(|a| {
            format!(
                "\n#{}\nVehicle: {}\nClient: {}\nService: {}\nParts: {}\nCost: {}{:.2}\nDate: {}\nStatus: {}\n",
                a.id,
                a.vehicle_number,
                a.client_name,
                a.service_description,
                a.parts.join(", "),
                cfg.currency,
                a.cost,
                a.scheduled_date,
                a.status,
            )
        })
        .collect()
}
