//! Tab content registry - единственный источник правды для маппинга tab.key → View

use crate::domain::a025_upd_document::ui::details::UpdDocumentDetail;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a025_upd_document::UpdDocument;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a025_upd_document_detail_<uuid>")
/// * `tabs_store` - контекст для закрытия таба (используется в detail-views с on_close)
///
/// # Returns
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match UpdDocument::id_from_tab_key(key) {
        // a025: УПД
        Some(id) => {
            let id = id.to_string();
            log!("✅ Creating UpdDocumentDetail with id: {}", id);
            view! {
                <UpdDocumentDetail
                    id=id
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any()
        }
        None => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
