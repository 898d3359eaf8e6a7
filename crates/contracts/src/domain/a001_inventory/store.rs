//! Состояние модуля склада и его редьюсер

use super::aggregate::{InventoryItem, InventoryItemDto, InventoryItemId};
use super::category::{filter_categories, toggle_expanded, Category};
use super::filter::InventoryFilter;
use super::seed::{seed_categories, seed_items, seed_sub_categories};
use super::sub_category::{SubCategoryFilter, SubCategoryRow};
use crate::domain::common::position_of;
use crate::error::StoreError;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryState {
    pub items: Vec<InventoryItem>,
    pub filter: InventoryFilter,
    pub categories: Vec<Category>,
    pub category_query: String,
    pub sub_categories: Vec<SubCategoryRow>,
    pub sub_category_filter: SubCategoryFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InventoryAction {
    SetQuery(String),
    SelectCategory(String),
    SelectSubCategory(String),
    /// Создание (id = None) или замена существующей позиции
    Save(InventoryItemDto),
    Delete {
        id: InventoryItemId,
        confirmed: bool,
    },
    SetCategoryQuery(String),
    ToggleCategory(String),
    SetSubCategoryQuery(String),
    SelectSubCategoryParent(String),
}

impl InventoryState {
    pub fn seeded() -> Self {
        Self {
            items: seed_items(),
            categories: seed_categories(),
            sub_categories: seed_sub_categories(),
            ..Default::default()
        }
    }

    /// Строки таблицы с учётом поиска и фильтров
    pub fn visible_items(&self) -> Vec<InventoryItem> {
        self.filter.apply(&self.items)
    }

    pub fn visible_categories(&self) -> Vec<Category> {
        filter_categories(&self.categories, &self.category_query)
    }

    pub fn visible_sub_categories(&self) -> Vec<SubCategoryRow> {
        self.sub_category_filter.apply(&self.sub_categories)
    }

    /// Возвращает ID сохранённой позиции для `Save`
    pub fn reduce(&mut self, action: InventoryAction) -> Result<Option<InventoryItemId>, StoreError> {
        match action {
            InventoryAction::SetQuery(query) => self.filter.query = query,
            InventoryAction::SelectCategory(value) => self.filter.select_category(&value),
            InventoryAction::SelectSubCategory(value) => self.filter.select_sub_category(&value),
            InventoryAction::Save(dto) => return self.save(dto).map(Some),
            InventoryAction::Delete { id, confirmed } => {
                let idx = position_of(&self.items, &id)
                    .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
                if !confirmed {
                    return Err(StoreError::NotConfirmed(id.to_string()));
                }
                let removed = self.items.remove(idx);
                log::info!("inventory: deleted {} ({})", removed.sku, removed.name);
            }
            InventoryAction::SetCategoryQuery(query) => self.category_query = query,
            InventoryAction::ToggleCategory(name) => {
                if !toggle_expanded(&mut self.categories, &name) {
                    return Err(StoreError::NotFound(name));
                }
            }
            InventoryAction::SetSubCategoryQuery(query) => self.sub_category_filter.query = query,
            InventoryAction::SelectSubCategoryParent(value) => {
                self.sub_category_filter.select_parent(&value)
            }
        }
        Ok(None)
    }

    fn save(&mut self, dto: InventoryItemDto) -> Result<InventoryItemId, StoreError> {
        dto.validate().map_err(StoreError::Validation)?;

        match dto.id.clone() {
            Some(raw) => {
                let id = InventoryItemId::new(&raw);
                let idx = position_of(&self.items, &id)
                    .ok_or_else(|| StoreError::NotFound(raw.clone()))?;
                self.items[idx] = dto.into_item(id.clone());
                log::info!("inventory: updated {}", id);
                Ok(id)
            }
            None => {
                let id = InventoryItemId::generate();
                self.items.push(dto.into_item(id.clone()));
                log::info!("inventory: created {}", id);
                Ok(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inventory::aggregate::StockStatus;
    use crate::shared::search::Choice;

    fn new_item(name: &str, quantity: &str) -> InventoryItemDto {
        InventoryItemDto {
            sku: format!("SKU-{}", name),
            name: name.to_string(),
            quantity: quantity.to_string(),
            cost: "1".into(),
            price: "2".into(),
            reorder_point: "5".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_appends_with_generated_id() {
        let mut state = InventoryState::seeded();
        let id = state
            .reduce(InventoryAction::Save(new_item("Cable", "3")))
            .unwrap()
            .unwrap();
        assert_eq!(state.items.len(), 6);
        let created = state.items.last().unwrap();
        assert_eq!(created.id, id);
        assert!(id.as_str().starts_with("item-"));
        assert_eq!(created.status, StockStatus::LowStock);
        assert_eq!(created.category, "Uncategorized");
        assert_eq!(created.sub_category, "General");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut state = InventoryState::seeded();
        let mut dto = InventoryItemDto::from_item(&state.items[1]);
        dto.quantity = "40".into();
        dto.name = "Smart Watch 2".into();
        let id = state.reduce(InventoryAction::Save(dto)).unwrap().unwrap();
        assert_eq!(id.as_str(), "2");
        assert_eq!(state.items.len(), 5);
        assert_eq!(state.items[1].name, "Smart Watch 2");
        assert_eq!(state.items[1].status, StockStatus::InStock);
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let mut state = InventoryState::seeded();
        let mut dto = new_item("Ghost", "1");
        dto.id = Some("missing".into());
        assert_eq!(
            state.reduce(InventoryAction::Save(dto)),
            Err(StoreError::NotFound("missing".into()))
        );
        assert_eq!(state.items.len(), 5);
    }

    #[test]
    fn test_save_requires_name() {
        let mut state = InventoryState::seeded();
        let dto = new_item("", "1");
        assert!(matches!(
            state.reduce(InventoryAction::Save(dto)),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut state = InventoryState::seeded();
        let id = InventoryItemId::new("3");
        assert_eq!(
            state.reduce(InventoryAction::Delete {
                id: id.clone(),
                confirmed: false
            }),
            Err(StoreError::NotConfirmed("3".into()))
        );
        assert_eq!(state.items.len(), 5);

        state
            .reduce(InventoryAction::Delete { id, confirmed: true })
            .unwrap();
        assert_eq!(state.items.len(), 4);
        assert!(state.items.iter().all(|i| i.sku != "PRD-003"));
    }

    #[test]
    fn test_filters_through_actions() {
        let mut state = InventoryState::seeded();
        state
            .reduce(InventoryAction::SelectCategory("Electronics".into()))
            .unwrap();
        state
            .reduce(InventoryAction::SelectSubCategory("Wearables".into()))
            .unwrap();
        assert_eq!(state.visible_items().len(), 1);

        state
            .reduce(InventoryAction::SelectCategory("all".into()))
            .unwrap();
        assert_eq!(state.filter.sub_category, Choice::All);
        state.reduce(InventoryAction::SetQuery("wireless".into())).unwrap();
        assert_eq!(state.visible_items().len(), 2);
    }

    #[test]
    fn test_category_tree_actions() {
        let mut state = InventoryState::seeded();
        state
            .reduce(InventoryAction::ToggleCategory("Other".into()))
            .unwrap();
        assert!(state.categories[4].expanded);
        assert!(state
            .reduce(InventoryAction::ToggleCategory("Toys".into()))
            .is_err());
        state
            .reduce(InventoryAction::SetCategoryQuery("AUD".into()))
            .unwrap();
        assert_eq!(state.visible_categories().len(), 1);
    }

    #[test]
    fn test_sub_category_tab_actions() {
        let mut state = InventoryState::seeded();
        assert_eq!(state.visible_sub_categories().len(), 5);
        state
            .reduce(InventoryAction::SelectSubCategoryParent("Accessories".into()))
            .unwrap();
        assert!(state.visible_sub_categories().is_empty());
        state
            .reduce(InventoryAction::SelectSubCategoryParent("all".into()))
            .unwrap();
        state
            .reduce(InventoryAction::SetSubCategoryQuery("TV".into()))
            .unwrap();
        let rows = state.visible_sub_categories();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].items, 8);
    }
}
