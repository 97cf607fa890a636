use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const DEFAULT_CENTER_NAME: &str = "Vehicle Service Center";
const DEFAULT_CURRENCY: &str = "$";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Название сервисного центра, выводится в заголовке меню.
    pub center_name: String,

    /// Проверять что дата введена в формате DD-MM-YYYY и существует в
    /// календаре.
    pub strict_dates: bool,

    /// Выбирать дату в календаре вместо ручного ввода.
    pub date_picker: bool,

    /// Символ валюты, которым подписывается стоимость.
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            center_name: DEFAULT_CENTER_NAME.to_owned(),
            strict_dates: true,
            date_picker: false,
            currency: DEFAULT_CURRENCY.to_owned(),
        }
    }
}

/// Загружает конфигурацию.
/// Если файла нет, он будет создан со значениями по умолчанию.
pub fn load(path: PathBuf) -> anyhow::Result<Config> {
    let mut cfg: Config = confy::load_path(path)?;

    normalize(&mut cfg);

    Ok(cfg)
}

pub fn normalize(cfg: &mut Config) {
    cfg.center_name = cfg.center_name.trim().to_owned();
    if cfg.center_name.is_empty() {
        cfg.center_name = DEFAULT_CENTER_NAME.to_owned();
    }

    cfg.currency = cfg.currency.trim().to_owned();
}
