use super::{EntityMetadata, EventStore, Origin};

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех агрегатов системы
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить бизнес-код записи (например, "УПД-000123")
    fn code(&self) -> &str;

    /// Получить описание/название записи
    fn description(&self) -> &str;

    /// Получить метаданные жизненного цикла
    fn metadata(&self) -> &EntityMetadata;

    /// Получить хранилище событий
    fn events(&self) -> &EventStore;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a025")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции для БД (например, "upd_document")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "УПД")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Архив УПД")
    fn list_name() -> &'static str;

    /// Источник данных агрегата
    fn origin() -> Origin;

    /// Полное имя агрегата для системы (например, "a025_upd_document")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
