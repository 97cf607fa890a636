use std::str::FromStr;

use crate::error::Error;

const OIL_CHANGE_BASE_COST: f64 = 50.0;
const ENGINE_REPAIR_BASE_COST: f64 = 200.0;

/// Наценка за трудоёмкий ремонт.
const ENGINE_REPAIR_MARKUP: f64 = 1.5;

/// Вид услуги.
/// Из строки разбирается по короткому тегу, выводится человекочитаемым
/// названием.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, enum_iterator::Sequence)]
pub enum ServiceKind {
    #[display(fmt = "Oil Change")]
    OilChange,
    #[display(fmt = "Engine Repair")]
    EngineRepair,
}

impl ServiceKind {
    /// Тег, по которому вид услуги вводится пользователем.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::OilChange => "oil",
            Self::EngineRepair => "engine",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim() {
            "oil" => Self::OilChange,
            "engine" => Self::EngineRepair,
            _ => return Err(Error::InvalidServiceType(s.to_owned())),
        };

        Ok(kind)
    }
}

/// Оказываемая услуга.
#[derive(Debug, Clone, PartialEq)]
pub enum Service {
    /// Замена масла.
    OilChange,

    /// Ремонт двигателя.
    EngineRepair { repair_type: String },
}

impl Service {
    /// Собирает услугу по её виду. Описание ремонта используется только для
    /// ремонта двигателя.
    pub fn new(kind: ServiceKind, repair_type: &str) -> Self {
        match kind {
            ServiceKind::OilChange => Self::OilChange,
            ServiceKind::EngineRepair => Self::EngineRepair {
                repair_type: repair_type.trim().to_owned(),
            },
        }
    }

    pub fn kind(&self) -> ServiceKind {
        match self {
            Self::OilChange => ServiceKind::OilChange,
            Self::EngineRepair { .. } => ServiceKind::EngineRepair,
        }
    }

    pub fn base_cost(&self) -> f64 {
        match self {
            Self::OilChange => OIL_CHANGE_BASE_COST,
            Self::EngineRepair { .. } => ENGINE_REPAIR_BASE_COST,
        }
    }

    /// Итоговая стоимость услуги.
    pub fn cost(&self) -> f64 {
        match self {
            Self::OilChange => self.base_cost(),
            Self::EngineRepair { .. } => self.base_cost() * ENGINE_REPAIR_MARKUP,
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::OilChange => "Standard Oil Change Service".to_owned(),
            Self::EngineRepair { repair_type } => format!("Engine Repair: {}", repair_type),
        }
    }

    /// Запчасти, которые понадобятся для услуги.
    pub fn parts(&self) -> &'static [&'static str] {
        match self {
            Self::OilChange => &["Oil Filter", "Engine Oil"],
            Self::EngineRepair { .. } => &["Engine Parts", "Lubricants"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(test)]
    mod service_kind {
        use super::*;

        macro_rules! from_str_tests_success {
            ($($name:ident: $value:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let (expected, input) = $value;
                    assert_eq!(expected, input.parse::<ServiceKind>().unwrap());
                }
            )*
            }
        }

        from_str_tests_success! {
            from_str_oil: (ServiceKind::OilChange, "oil"),
            from_str_engine: (ServiceKind::EngineRepair, "engine"),
            from_str_padded: (ServiceKind::OilChange, " oil\n"),
        }

        macro_rules! from_str_tests_fail {
            ($($name:ident: $value:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let input = $value;
                    assert_eq!(
                        Error::InvalidServiceType(input.to_owned()),
                        input.parse::<ServiceKind>().unwrap_err()
                    );
                }
            )*
            }
        }

        from_str_tests_fail! {
            from_str_empty: "",
            from_str_unknown: "wash",
            from_str_uppercase: "OIL",
            from_str_label: "Oil Change",
        }

        #[test]
        fn tag_round_trip() {
            for kind in enum_iterator::all::<ServiceKind>() {
                assert_eq!(kind, kind.tag().parse::<ServiceKind>().unwrap());
            }
        }
    }

    #[cfg(test)]
    mod service {
        use super::*;

        macro_rules! cost_tests {
            ($($name:ident: $value:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let (expected, input) = $value;
                    assert_eq!(expected, input.cost());
                }
            )*
            }
        }

        cost_tests! {
            cost_oil_change: (50.0, Service::OilChange),
            cost_engine_repair: (300.0, Service::new(ServiceKind::EngineRepair, "Timing belt")),
            cost_engine_repair_empty: (300.0, Service::new(ServiceKind::EngineRepair, "")),
            cost_engine_repair_long: (300.0, Service::new(ServiceKind::EngineRepair, &"x".repeat(512))),
        }

        #[test]
        fn oil_change_ignores_repair_type() {
            assert_eq!(
                Service::OilChange,
                Service::new(ServiceKind::OilChange, "anything")
            );
        }

        #[test]
        fn descriptions() {
            assert_eq!("Standard Oil Change Service", Service::OilChange.description());
            assert_eq!(
                "Engine Repair: Head gasket",
                Service::new(ServiceKind::EngineRepair, " Head gasket ").description()
            );
        }

        #[test]
        fn parts() {
            assert_eq!(["Oil Filter", "Engine Oil"], Service::OilChange.parts());
            assert_eq!(
                ["Engine Parts", "Lubricants"],
                Service::new(ServiceKind::EngineRepair, "Pistons").parts()
            );
        }

        #[test]
        fn kind_matches_variant() {
            for kind in enum_iterator::all::<ServiceKind>() {
                assert_eq!(kind, Service::new(kind, "x").kind());
            }
        }
    }
}
