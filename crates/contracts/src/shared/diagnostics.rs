//! Диагностический приёмник действий списков (редактирование/удаление
//! заказов, клиентов, поставщиков). Данных эти действия не меняют.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticAction {
    View,
    Edit,
    Delete,
    Save,
}

impl DiagnosticAction {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticAction::View => "view",
            DiagnosticAction::Edit => "edit",
            DiagnosticAction::Delete => "delete",
            DiagnosticAction::Save => "save",
        }
    }
}

/// Одна запись диагностического журнала
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    pub module: String,
    pub action: DiagnosticAction,
    pub subject: String,
}

impl DiagnosticEntry {
    pub fn new(module: &str, action: DiagnosticAction, subject: &str) -> Self {
        Self {
            module: module.to_string(),
            action,
            subject: subject.to_string(),
        }
    }
}

/// Куда уходят диагностические записи. В браузере это консоль,
/// в тестах можно подставить свою реализацию.
pub trait DiagnosticSink {
    fn record(&self, entry: DiagnosticEntry);
}

/// Приёмник по умолчанию: `log::info!` (в браузере попадает в console через console_log)
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, entry: DiagnosticEntry) {
        log::info!(
            target: "diagnostics",
            "[{}] {} {}",
            entry.module,
            entry.action.as_str(),
            entry.subject
        );
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Запоминает записи, чтобы тесты могли их проверить
    #[derive(Default)]
    pub struct MemorySink {
        pub entries: RefCell<Vec<DiagnosticEntry>>,
    }

    impl DiagnosticSink for MemorySink {
        fn record(&self, entry: DiagnosticEntry) {
            self.entries.borrow_mut().push(entry);
        }
    }
}
