use super::AggregateId;

/// Трейт для корня агрегата
///
/// Даёт спискам и хранилищу единый способ найти запись и подписать её в UI
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Бизнес-код записи (SKU, номер заказа)
    fn code(&self) -> &str;

    /// Название записи для заголовков и диагностики
    fn description(&self) -> &str;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "inventory")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата (например, "a001_inventory"), используется как
    /// префикс id страниц
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}

/// Позиция записи с данным ID
pub fn position_of<T: AggregateRoot>(items: &[T], id: &T::Id) -> Option<usize> {
    items.iter().position(|item| &item.id() == id)
}

pub fn find_by_id<'a, T: AggregateRoot>(items: &'a [T], id: &T::Id) -> Option<&'a T> {
    items.iter().find(|item| &item.id() == id)
}
