//! Единое состояние приложения и типизированные действия модулей.
//!
//! Фронтенд держит `AppState` в одном `RwSignal` и меняет его только через
//! [`AppState::reduce`].

use crate::config::AppConfig;
use crate::domain::a001_inventory::store::{InventoryAction, InventoryState};
use crate::domain::a002_pos::cart::{Cart, CartAction};
use crate::domain::a002_pos::checkout::Receipt;
use crate::domain::a002_pos::product::{CatalogFilter, CatalogTab, Product, ViewMode};
use crate::domain::a002_pos::seed::seed_products;
use crate::domain::a003_order::aggregate::{Order, OrderTab};
use crate::domain::a003_order::seed::seed_orders;
use crate::domain::a004_customer::aggregate::{Customer, CustomerTab};
use crate::domain::a004_customer::seed::seed_customers;
use crate::domain::a005_supplier::aggregate::{Supplier, SupplierTab};
use crate::domain::a005_supplier::seed::seed_suppliers;
use crate::domain::a006_transaction::aggregate::{Transaction, TransactionPage};
use crate::domain::a006_transaction::seed::seed_transactions;
use crate::domain::common::{ListAction, ListState};
use crate::error::StoreError;
use crate::navigation::{resolve, ModuleId};
use crate::shared::diagnostics::DiagnosticSink;
use crate::shared::search::{filter_records, Choice};

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub path: String,
    pub module: ModuleId,
    pub sidebar_collapsed: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            module: ModuleId::Dashboard,
            sidebar_collapsed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    Navigate(String),
    ToggleSidebar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    SetQuery(String),
    SetCategory(String),
    SetTab(CatalogTab),
    SetViewMode(ViewMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Navigation(NavigationAction),
    Inventory(InventoryAction),
    Catalog(CatalogAction),
    Cart(CartAction),
    /// Оплата завершена: корзина очищается, продажа попадает в транзакции
    SaleCompleted(Receipt),
    Orders(ListAction),
    Customers(ListAction),
    Suppliers(ListAction),
    Transactions(PageAction),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub config: AppConfig,
    pub navigation: NavigationState,
    pub inventory: InventoryState,
    pub products: Vec<Product>,
    pub catalog: CatalogFilter,
    pub cart: Cart,
    pub last_receipt: Option<Receipt>,
    pub orders: Vec<Order>,
    pub orders_list: ListState,
    pub customers: Vec<Customer>,
    pub customers_list: ListState,
    pub suppliers: Vec<Supplier>,
    pub suppliers_list: ListState,
    pub transactions: Vec<Transaction>,
    pub transactions_page: TransactionPage,
}

impl AppState {
    /// Состояние с мок-данными всех модулей
    pub fn seeded(config: AppConfig) -> Self {
        let transactions = seed_transactions();
        let transactions_page =
            TransactionPage::first(transactions.len(), config.transactions_page_size);
        Self {
            config,
            navigation: NavigationState::default(),
            inventory: InventoryState::seeded(),
            products: seed_products(),
            catalog: CatalogFilter::default(),
            cart: Cart::default(),
            last_receipt: None,
            orders: seed_orders(),
            orders_list: ListState::default(),
            customers: seed_customers(),
            customers_list: ListState::default(),
            suppliers: seed_suppliers(),
            suppliers_list: ListState::default(),
            transactions,
            transactions_page,
        }
    }

    pub fn reduce(&mut self, action: AppAction, sink: &dyn DiagnosticSink) -> Result<(), StoreError> {
        match action {
            AppAction::Navigation(NavigationAction::Navigate(path)) => {
                self.navigation.module = resolve(&path);
                self.navigation.path = path;
            }
            AppAction::Navigation(NavigationAction::ToggleSidebar) => {
                self.navigation.sidebar_collapsed = !self.navigation.sidebar_collapsed;
            }
            AppAction::Inventory(action) => {
                self.inventory.reduce(action)?;
            }
            AppAction::Catalog(action) => match action {
                CatalogAction::SetQuery(query) => self.catalog.query = query,
                CatalogAction::SetCategory(value) => self.catalog.category = Choice::from_value(&value),
                CatalogAction::SetTab(tab) => self.catalog.tab = tab,
                CatalogAction::SetViewMode(mode) => self.catalog.view_mode = mode,
            },
            AppAction::Cart(action) => self.cart.reduce(action),
            AppAction::SaleCompleted(receipt) => {
                self.cart.settle(&receipt.lines);
                self.transactions.insert(0, Transaction::from_receipt(&receipt));
                self.transactions_page =
                    TransactionPage::first(self.transactions.len(), self.config.transactions_page_size);
                log::info!(
                    "pos: sale {} completed, {:.2} via {}",
                    receipt.transaction_id,
                    receipt.amount,
                    receipt.payment_method.label()
                );
                self.last_receipt = Some(receipt);
            }
            AppAction::Orders(action) => self.orders_list.reduce(&self.orders, action, sink)?,
            AppAction::Customers(action) => {
                self.customers_list.reduce(&self.customers, action, sink)?
            }
            AppAction::Suppliers(action) => {
                self.suppliers_list.reduce(&self.suppliers, action, sink)?
            }
            AppAction::Transactions(PageAction::Previous) => {
                self.transactions_page = self.transactions_page.previous();
            }
            AppAction::Transactions(PageAction::Next) => {
                self.transactions_page = self.transactions_page.next();
            }
        }
        Ok(())
    }

    pub fn visible_products(&self) -> Vec<Product> {
        self.catalog.apply(&self.products)
    }

    pub fn visible_orders(&self) -> Vec<Order> {
        let tab = OrderTab::from_key(&self.orders_list.tab);
        filter_records(&self.orders, &self.orders_list.query, &tab)
    }

    pub fn visible_customers(&self) -> Vec<Customer> {
        let tab = CustomerTab::from_key(&self.customers_list.tab);
        filter_records(&self.customers, &self.customers_list.query, &tab)
    }

    pub fn visible_suppliers(&self) -> Vec<Supplier> {
        let tab = SupplierTab::from_key(&self.suppliers_list.tab);
        filter_records(&self.suppliers, &self.suppliers_list.query, &tab)
    }

    pub fn transaction_rows(&self) -> &[Transaction] {
        self.transactions_page
            .rows(&self.transactions, self.config.transactions_page_size)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_pos::checkout::{CheckoutRequest, PaymentMethod};
    use crate::shared::diagnostics::testing::MemorySink;
    use crate::shared::diagnostics::DiagnosticAction;

    #[test]
    fn test_navigation() {
        let sink = MemorySink::default();
        let mut state = AppState::default();
        state
            .reduce(AppAction::Navigation(NavigationAction::Navigate("/pos".into())), &sink)
            .unwrap();
        assert_eq!(state.navigation.module, ModuleId::Pos);

        state
            .reduce(AppAction::Navigation(NavigationAction::Navigate("/reports".into())), &sink)
            .unwrap();
        assert_eq!(state.navigation.module, ModuleId::Unknown);
        assert_eq!(state.navigation.path, "/reports");

        state
            .reduce(AppAction::Navigation(NavigationAction::ToggleSidebar), &sink)
            .unwrap();
        assert!(state.navigation.sidebar_collapsed);
    }

    #[test]
    fn test_sale_completed_clears_cart_and_prepends_transaction() {
        let sink = MemorySink::default();
        let mut state = AppState::default();
        let product = state.products[0].clone();
        state.reduce(AppAction::Cart(CartAction::Add(product.clone())), &sink).unwrap();
        state.reduce(AppAction::Cart(CartAction::Add(product)), &sink).unwrap();
        assert_eq!(state.cart.item_count(), 2);

        let request = CheckoutRequest::from_cart(&state.cart, 0.1, PaymentMethod::Card).unwrap();
        let receipt = Receipt::issue(&request, chrono::Utc::now());
        let trx_id = receipt.transaction_id.clone();
        state.reduce(AppAction::SaleCompleted(receipt), &sink).unwrap();

        assert!(state.cart.is_empty());
        assert_eq!(state.transactions.len(), 9);
        assert_eq!(state.transactions[0].id.as_str(), trx_id);
        assert_eq!(state.transactions[0].items, 2);
        assert_eq!(state.transactions_page.page, 1);
        assert_eq!(state.transactions_page.total_pages, 2);
        assert!(state.last_receipt.is_some());
    }

    #[test]
    fn test_sale_completed_keeps_items_added_during_payment() {
        let sink = MemorySink::default();
        let mut state = AppState::default();
        let first = state.products[0].clone();
        let second = state.products[1].clone();
        state.reduce(AppAction::Cart(CartAction::Add(first)), &sink).unwrap();

        let request = CheckoutRequest::from_cart(&state.cart, 0.1, PaymentMethod::Cash).unwrap();
        let receipt = Receipt::issue(&request, chrono::Utc::now());
        state.reduce(AppAction::Cart(CartAction::Add(second.clone())), &sink).unwrap();
        state.reduce(AppAction::SaleCompleted(receipt), &sink).unwrap();

        assert_eq!(state.cart.lines().len(), 1);
        assert_eq!(state.cart.lines()[0].product.id, second.id);
        assert_eq!(state.transactions[0].items, 1);
    }

    #[test]
    fn test_list_actions_route_to_their_module() {
        let sink = MemorySink::default();
        let mut state = AppState::default();
        let order_id = state.orders[0].id.to_string();

        state
            .reduce(AppAction::Orders(ListAction::SetTab("delivered".into())), &sink)
            .unwrap();
        assert!(state
            .visible_orders()
            .iter()
            .all(|o| o.status.label() == "Delivered"));

        state
            .reduce(AppAction::Orders(ListAction::Select(order_id.clone())), &sink)
            .unwrap();
        assert_eq!(state.orders_list.selected.as_deref(), Some(order_id.as_str()));
        assert_eq!(state.customers_list.selected, None);

        let err = state
            .reduce(
                AppAction::Orders(ListAction::Delete { id: order_id.clone(), confirmed: false }),
                &sink,
            )
            .unwrap_err();
        assert_eq!(err, StoreError::NotConfirmed(order_id));
        // Просмотр записан, неподтверждённое удаление нет
        let entries = sink.entries.borrow();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, DiagnosticAction::View);
    }

    #[test]
    fn test_catalog_actions() {
        let sink = MemorySink::default();
        let mut state = AppState::default();
        state
            .reduce(AppAction::Catalog(CatalogAction::SetTab(CatalogTab::Popular)), &sink)
            .unwrap();
        assert_eq!(state.visible_products().len(), 8);

        state
            .reduce(AppAction::Catalog(CatalogAction::SetCategory("all".into())), &sink)
            .unwrap();
        assert_eq!(state.catalog.category, Choice::All);

        state
            .reduce(AppAction::Catalog(CatalogAction::SetViewMode(ViewMode::List)), &sink)
            .unwrap();
        assert_eq!(state.catalog.view_mode, ViewMode::List);
    }

    #[test]
    fn test_transaction_paging() {
        let sink = MemorySink::default();
        let mut state = AppState::default();
        assert_eq!(state.transaction_rows().len(), 5);
        state.reduce(AppAction::Transactions(PageAction::Next), &sink).unwrap();
        assert_eq!(state.transaction_rows().len(), 3);
        state.reduce(AppAction::Transactions(PageAction::Previous), &sink).unwrap();
        assert_eq!(state.transactions_page.page, 1);
    }

    #[test]
    fn test_inventory_errors_surface() {
        let sink = MemorySink::default();
        let mut state = AppState::default();
        let id = state.inventory.items[0].id.clone();
        let err = state
            .reduce(
                AppAction::Inventory(InventoryAction::Delete { id: id.clone(), confirmed: false }),
                &sink,
            )
            .unwrap_err();
        assert_eq!(err, StoreError::NotConfirmed(id.to_string()));
        assert_eq!(state.inventory.items.len(), 5);
    }
}
