use log::debug;

/// Получатель уведомлений от реестра.
///
/// Реестр знает только об этом трейте, поэтому новый канал доставки
/// (почта, пуш и т.п.) добавляется отдельной реализацией.
pub trait Notifiable: Send + Sync {
    /// Имя получателя, под которым он виден в списке записей.
    fn name(&self) -> &str;

    /// Доставляет текстовое уведомление получателю.
    fn notify(&self, message: &str);
}

/// Клиент сервисного центра.
/// Уведомления выводит прямо в консоль.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    name: String,
    contact: String,
}

impl Client {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }
}

impl Notifiable for Client {
    fn name(&self) -> &str {
        &self.name
    }

    fn notify(&self, message: &str) {
        debug!("Уведомляем {} ({})", self.name, self.contact);

        println!("Notification for {}: {}", self.name, message);
    }
}
