//! Поиск по подстроке и фильтры "all / конкретное значение".

use serde::{Deserialize, Serialize};

/// Значение фильтра в выпадающих списках, где "all" означает "без ограничения"
pub const ALL: &str = "all";

/// Trait для записей, по которым работает строка поиска
pub trait Searchable {
    /// Поля, в которых ищется подстрока
    fn search_fields(&self) -> Vec<&str>;

    /// Запрос совпадает, если он является подстрокой хотя бы одного поля
    /// без учёта регистра. Пробелы по краям запроса отбрасываются,
    /// пустой запрос совпадает со всем.
    fn matches_query(&self, query: &str) -> bool {
        matches_any(&self.search_fields(), query)
    }
}

/// Вкладка или иной предикат, отсекающий записи списка
pub trait TabFilter<T> {
    fn admits(&self, item: &T) -> bool;
}

pub fn matches_any(fields: &[&str], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Поиск + вкладка. Порядок исходного списка сохраняется.
pub fn filter_records<T, F>(items: &[T], query: &str, tab: &F) -> Vec<T>
where
    T: Searchable + Clone,
    F: TabFilter<T>,
{
    items
        .iter()
        .filter(|item| tab.admits(item) && item.matches_query(query))
        .cloned()
        .collect()
}

/// Выбор в фильтре по категории: всё или точное значение
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// Из значения `<select>`: "all" (и пустая строка) снимают ограничение
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == ALL {
            Choice::All
        } else {
            Choice::Only(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            Choice::All => ALL,
            Choice::Only(v) => v,
        }
    }

    /// Сравнение точное, как у значений из каталога категорий
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(v) => v == value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Searchable for Named {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0]
        }
    }

    #[test]
    fn test_substring_is_case_insensitive() {
        let items = [Named("Wireless Headphones"), Named("Smart Watch")];
        let hits: Vec<&str> = items
            .iter()
            .filter(|i| i.matches_query("PHONE"))
            .map(|i| i.0)
            .collect();
        assert_eq!(hits, vec!["Wireless Headphones"]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(Named("Smart Watch").matches_query(""));
        assert!(matches_any(&[""], ""));
    }

    #[test]
    fn test_query_is_trimmed() {
        assert!(Named("Smart Watch").matches_query("   "));
        assert!(Named("Smart Watch").matches_query("  watch "));
        assert!(!Named("Smart Watch").matches_query(" phone"));
        // внутренние пробелы значимы
        assert!(!Named("Smart Watch").matches_query("smart  watch"));
    }

    #[test]
    fn test_choice_from_value() {
        assert_eq!(Choice::from_value("all"), Choice::All);
        assert_eq!(Choice::from_value(""), Choice::All);
        assert_eq!(
            Choice::from_value("Audio"),
            Choice::Only("Audio".to_string())
        );
        assert!(Choice::from_value("Audio").admits("Audio"));
        assert!(!Choice::from_value("Audio").admits("audio"));
        assert_eq!(Choice::All.as_value(), "all");
    }
}
