//! ViewModel for UPD document details

use super::model::{fetch_all, UpdDocumentData, DOCUMENT_NOT_FOUND};
use contracts::domain::a025_upd_document::{UpdDocument, UpdDocumentDetailDto};
use contracts::domain::a026_reception::{
    calculate_total, group_items, summarize, ReceptionGroup, ReceptionItemDto,
};
use contracts::domain::common::AggregateRoot;
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Итог загрузки: документ со строками либо ошибка, без частичных данных
#[derive(Debug, PartialEq)]
struct LoadOutcome {
    document: Option<UpdDocumentDetailDto>,
    items: Vec<ReceptionItemDto>,
    error: Option<String>,
}

impl From<Result<UpdDocumentData, String>> for LoadOutcome {
    fn from(result: Result<UpdDocumentData, String>) -> Self {
        match result {
            Ok((document, items)) => Self {
                document: Some(document),
                items,
                error: None,
            },
            Err(e) => Self {
                document: None,
                items: Vec::new(),
                error: Some(e),
            },
        }
    }
}

fn is_not_found(error: Option<&str>) -> bool {
    error == Some(DOCUMENT_NOT_FOUND)
}

#[derive(Clone)]
pub struct UpdDocumentDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub document: RwSignal<Option<UpdDocumentDetailDto>>,
    pub items: RwSignal<Vec<ReceptionItemDto>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl UpdDocumentDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            document: RwSignal::new(None),
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Заголовок страницы и таба: "УПД {номер}"
    pub fn title(&self) -> Signal<String> {
        let document = self.document;
        Signal::derive(move || {
            document.with(|doc| match doc {
                Some(doc) => format!("{} {}", UpdDocument::element_name(), doc.document_number),
                None => UpdDocument::element_name().to_string(),
            })
        })
    }

    pub fn grouped(&self) -> Signal<Vec<ReceptionGroup>> {
        let items = self.items;
        Signal::derive(move || items.with(|items| group_items(items)))
    }

    pub fn total(&self) -> Signal<f64> {
        let items = self.items;
        Signal::derive(move || items.with(|items| calculate_total(items)))
    }

    pub fn items_count(&self) -> Signal<usize> {
        let items = self.items;
        Signal::derive(move || items.with(Vec::len))
    }

    /// Строки с нераспознанным типом операции (в итог не входят)
    pub fn unclassified_count(&self) -> Signal<usize> {
        let items = self.items;
        Signal::derive(move || items.with(|items| summarize(items).ignored_count))
    }

    pub fn not_found(&self) -> Signal<bool> {
        let error = self.error;
        Signal::derive(move || error.with(|e| is_not_found(e.as_deref())))
    }

    pub fn load(&self, id: String) {
        let vm = self.clone();
        vm.id.set(Some(id.clone()));
        vm.loading.set(true);
        vm.error.set(None);

        spawn_local(async move {
            let result = fetch_all(&id).await;
            if let Err(e) = &result {
                log!("Failed to load UPD {}: {}", id, e);
            }
            let outcome = LoadOutcome::from(result);
            vm.document.set(outcome.document);
            vm.items.set(outcome.items);
            vm.error.set(outcome.error);
            vm.loading.set(false);
        });
    }
}
