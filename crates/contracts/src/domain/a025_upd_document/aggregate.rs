use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdDocumentId(pub Uuid);

impl UpdDocumentId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for UpdDocumentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UpdDocumentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Универсальный передаточный документ (агрегат a025)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdDocument {
    #[serde(flatten)]
    pub base: BaseAggregate<UpdDocumentId>,

    /// Номер УПД
    pub document_no: String,

    /// Дата УПД (YYYY-MM-DD)
    pub document_date: String,

    /// Ссылка на a003_counterparty
    pub counterparty_id: String,

    /// Ссылка на подразделение (a027_subdivision)
    pub subdivision_id: Option<String>,

    /// Сумма доходов по документу
    pub total_income: Option<f64>,

    /// Сумма расходов по документу
    pub total_expense: Option<f64>,
}

impl UpdDocument {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Ключ таба карточки УПД, например "a025_upd_document_detail_<uuid>"
    pub fn detail_tab_key(id: &str) -> String {
        format!("{}_detail_{}", Self::full_name(), id)
    }

    /// Обратная операция к [`UpdDocument::detail_tab_key`]
    pub fn id_from_tab_key(key: &str) -> Option<&str> {
        key.strip_prefix(Self::aggregate_index())
            .and_then(|rest| rest.strip_prefix('_'))
            .and_then(|rest| rest.strip_prefix(Self::collection_name()))
            .and_then(|rest| rest.strip_prefix("_detail_"))
            .filter(|id| !id.is_empty())
    }
}

impl AggregateRoot for UpdDocument {
    type Id = UpdDocumentId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn events(&self) -> &EventStore {
        &self.base.events
    }

    fn aggregate_index() -> &'static str {
        "a025"
    }

    fn collection_name() -> &'static str {
        "upd_document"
    }

    fn element_name() -> &'static str {
        "УПД"
    }

    fn list_name() -> &'static str {
        "Архив УПД"
    }

    fn origin() -> Origin {
        Origin::Self_
    }
}
