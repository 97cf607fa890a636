/// Создаёт новый доменный тип.
///
/// Строковый вариант обрезает пробелы по краям и прогоняет значение через
/// функцию валидации. Числовой вариант ничего не проверяет, но умеет
/// разбираться из строки и (де)сериализоваться как обёрнутое значение.
#[macro_export]
macro_rules! newtype {
    ($tname:ident, String, $validate_fn:ident) => {
        #[derive(
            std::fmt::Debug,
            std::clone::Clone,
            std::cmp::PartialEq,
            std::cmp::Eq,
            std::hash::Hash,
        )]
        pub struct $tname(String);

        impl $tname {
            pub fn new(value: &str) -> anyhow::Result<Self> {
                let value = value.trim();
                Self::validate(value)?;
                Ok(Self(value.to_owned()))
            }

            fn validate(value: &str) -> anyhow::Result<()> {
                $validate_fn(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        #[allow(clippy::from_over_into)]
        impl std::convert::Into<String> for $tname {
            fn into(self) -> String {
                self.0
            }
        }

        impl std::convert::TryFrom<String> for $tname {
            type Error = anyhow::Error;

            fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
                $tname::new(&value)
            }
        }

        impl std::str::FromStr for $tname {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $tname::new(s)
            }
        }

        impl std::fmt::Display for $tname {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };

    ($tname:ident, $type:ty) => {
        #[derive(
            std::fmt::Debug,
            std::clone::Clone,
            std::marker::Copy,
            std::cmp::PartialEq,
            std::cmp::Eq,
            std::cmp::PartialOrd,
            std::cmp::Ord,
            std::hash::Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $tname($type);

        impl $tname {
            pub fn new(value: $type) -> Self {
                Self(value)
            }

            pub fn get(&self) -> $type {
                self.0
            }
        }

        impl std::convert::From<$type> for $tname {
            fn from(value: $type) -> Self {
                $tname::new(value)
            }
        }

        impl std::str::FromStr for $tname {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($tname::new(s.trim().parse::<$type>()?))
            }
        }

        impl std::fmt::Display for $tname {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
