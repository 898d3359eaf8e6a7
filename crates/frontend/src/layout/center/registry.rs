//! Единственное место сопоставления модуля и его страницы

use super::placeholder::ModulePlaceholder;
use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::dashboards::d401_analytics::ui::AnalyticsDashboard;
use crate::domain::a001_inventory::ui::InventoryPage;
use crate::domain::a002_pos::ui::PosPage;
use crate::domain::a003_order::ui::OrderList;
use crate::domain::a004_customer::ui::CustomerList;
use crate::domain::a005_supplier::ui::SupplierList;
use crate::system::settings::ui::SettingsPage;
use contracts::navigation::ModuleId;
use leptos::prelude::*;

pub fn render_module_content(module: ModuleId) -> AnyView {
    match module {
        ModuleId::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        ModuleId::Inventory => view! { <InventoryPage /> }.into_any(),
        ModuleId::Pos => view! { <PosPage /> }.into_any(),
        ModuleId::Analytics => view! { <AnalyticsDashboard /> }.into_any(),
        ModuleId::Customers => view! { <CustomerList /> }.into_any(),
        ModuleId::Orders => view! { <OrderList /> }.into_any(),
        ModuleId::Suppliers => view! { <SupplierList /> }.into_any(),
        ModuleId::Settings => view! { <SettingsPage /> }.into_any(),
        ModuleId::Unknown => view! { <ModulePlaceholder /> }.into_any(),
    }
}
