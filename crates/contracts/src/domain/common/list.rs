//! Состояние списков только для чтения (заказы, клиенты, поставщики)
//! и редьюсер их действий

use serde::{Deserialize, Serialize};

use super::{find_by_id, AggregateId, AggregateRoot};
use crate::error::StoreError;
use crate::shared::diagnostics::{DiagnosticAction, DiagnosticEntry, DiagnosticSink};
use crate::shared::search::ALL;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    pub query: String,
    /// Ключ активной вкладки ("all", "pending", ...)
    pub tab: String,
    /// Запись, открытая в диалоге просмотра
    pub selected: Option<String>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            query: String::new(),
            tab: ALL.to_string(),
            selected: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    SetQuery(String),
    SetTab(String),
    Select(String),
    CloseDetails,
    Edit(String),
    Delete { id: String, confirmed: bool },
}

impl ListState {
    /// Применить действие. Записи не меняются: редактирование и удаление
    /// только пишутся в диагностический приёмник.
    pub fn reduce<T: AggregateRoot>(
        &mut self,
        records: &[T],
        action: ListAction,
        sink: &dyn DiagnosticSink,
    ) -> Result<(), StoreError> {
        match action {
            ListAction::SetQuery(query) => self.query = query,
            ListAction::SetTab(tab) => self.tab = tab,
            ListAction::Select(id) => {
                let record = lookup(records, &id)?;
                sink.record(entry::<T>(DiagnosticAction::View, record));
                self.selected = Some(id);
            }
            ListAction::CloseDetails => self.selected = None,
            ListAction::Edit(id) => {
                let record = lookup(records, &id)?;
                sink.record(entry::<T>(DiagnosticAction::Edit, record));
            }
            ListAction::Delete { id, confirmed } => {
                let record = lookup(records, &id)?;
                if !confirmed {
                    return Err(StoreError::NotConfirmed(id));
                }
                sink.record(entry::<T>(DiagnosticAction::Delete, record));
                if self.selected.as_deref() == Some(id.as_str()) {
                    self.selected = None;
                }
            }
        }
        Ok(())
    }

    pub fn selected_record<'a, T: AggregateRoot>(&self, records: &'a [T]) -> Option<&'a T> {
        let id = self.selected.as_deref()?;
        lookup(records, id).ok()
    }
}

fn lookup<'a, T: AggregateRoot>(records: &'a [T], id: &str) -> Result<&'a T, StoreError> {
    let parsed = T::Id::from_string(id).map_err(StoreError::Validation)?;
    find_by_id(records, &parsed).ok_or_else(|| StoreError::NotFound(id.to_string()))
}

fn entry<T: AggregateRoot>(action: DiagnosticAction, record: &T) -> DiagnosticEntry {
    DiagnosticEntry::new(
        T::collection_name(),
        action,
        &format!("{} ({})", record.code(), record.description()),
    )
}
