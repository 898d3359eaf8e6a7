//! Сопоставление адреса страницы и модуля дашборда

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleId {
    Dashboard,
    Inventory,
    Pos,
    Analytics,
    Customers,
    Orders,
    Suppliers,
    Settings,
    /// Адрес, для которого модуля нет; рисуется заглушка
    Unknown,
}

impl ModuleId {
    /// Порядок пунктов бокового меню
    pub const NAVIGATION: [ModuleId; 8] = [
        ModuleId::Dashboard,
        ModuleId::Inventory,
        ModuleId::Pos,
        ModuleId::Analytics,
        ModuleId::Customers,
        ModuleId::Orders,
        ModuleId::Suppliers,
        ModuleId::Settings,
    ];

    pub fn path(self) -> Option<&'static str> {
        match self {
            ModuleId::Dashboard => Some("/"),
            ModuleId::Inventory => Some("/inventory"),
            ModuleId::Pos => Some("/pos"),
            ModuleId::Analytics => Some("/analytics"),
            ModuleId::Customers => Some("/customers"),
            ModuleId::Orders => Some("/orders"),
            ModuleId::Suppliers => Some("/suppliers"),
            ModuleId::Settings => Some("/settings"),
            ModuleId::Unknown => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ModuleId::Dashboard => "Dashboard",
            ModuleId::Inventory => "Inventory",
            ModuleId::Pos => "Point of Sale",
            ModuleId::Analytics => "Analytics",
            ModuleId::Customers => "Customers",
            ModuleId::Orders => "Orders",
            ModuleId::Suppliers => "Suppliers",
            ModuleId::Settings => "Settings",
            ModuleId::Unknown => "Module Under Development",
        }
    }

    /// Имя иконки для `icon()` фронтенда
    pub fn icon(self) -> &'static str {
        match self {
            ModuleId::Dashboard => "layout-dashboard",
            ModuleId::Inventory => "package",
            ModuleId::Pos => "shopping-cart",
            ModuleId::Analytics => "bar-chart",
            ModuleId::Customers => "users",
            ModuleId::Orders => "clipboard-list",
            ModuleId::Suppliers => "truck",
            ModuleId::Settings => "settings",
            ModuleId::Unknown => "alert-triangle",
        }
    }
}

/// Точка расширения: как адрес превращается в модуль
pub trait Router {
    fn resolve(&self, path: &str) -> ModuleId;
}

/// Маршрутизация по пути: без учёта регистра, хвостовой `/`, `?query` и
/// `#fragment` игнорируются
#[derive(Debug, Clone, Copy, Default)]
pub struct PathRouter;

impl Router for PathRouter {
    fn resolve(&self, path: &str) -> ModuleId {
        let normalized = normalize_path(path);
        ModuleId::NAVIGATION
            .into_iter()
            .find(|module| module.path() == Some(normalized.as_str()))
            .unwrap_or(ModuleId::Unknown)
    }
}

pub fn resolve(path: &str) -> ModuleId {
    PathRouter.resolve(path)
}

fn normalize_path(path: &str) -> String {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    let trimmed = path[..end].trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_lowercase()
    } else {
        format!("/{}", trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        let table = [
            ("/", ModuleId::Dashboard),
            ("/inventory", ModuleId::Inventory),
            ("/pos", ModuleId::Pos),
            ("/analytics", ModuleId::Analytics),
            ("/customers", ModuleId::Customers),
            ("/orders", ModuleId::Orders),
            ("/suppliers", ModuleId::Suppliers),
            ("/settings", ModuleId::Settings),
        ];
        for (path, expected) in table {
            assert_eq!(resolve(path), expected, "path {}", path);
        }
    }

    #[test]
    fn test_resolve_ignores_decorations() {
        assert_eq!(resolve("/inventory/"), ModuleId::Inventory);
        assert_eq!(resolve("/orders?tab=pending"), ModuleId::Orders);
        assert_eq!(resolve("/pos#cart"), ModuleId::Pos);
        assert_eq!(resolve("/Customers"), ModuleId::Customers);
        assert_eq!(resolve(""), ModuleId::Dashboard);
        assert_eq!(resolve("settings"), ModuleId::Settings);
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(resolve("/reports"), ModuleId::Unknown);
        assert_eq!(resolve("/inventory/items/7"), ModuleId::Unknown);
        assert_eq!(ModuleId::Unknown.path(), None);
        assert_eq!(ModuleId::Unknown.title(), "Module Under Development");
    }

    #[test]
    fn test_path_is_inverse_of_resolve() {
        for module in ModuleId::NAVIGATION {
            let path = module.path().unwrap();
            assert_eq!(resolve(path), module);
        }
    }
}
