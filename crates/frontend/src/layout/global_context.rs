use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
        }
    }

    /// Открывает таб из `?active=<key>` и дальше держит query string
    /// в соответствии с активным табом.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_key_from_search(&search) {
            let exists = self
                .opened
                .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == active_key));
            if !exists {
                let title = initial_tab_title(&active_key);
                self.open_tab(&active_key, &title);
            } else {
                self.activate_tab(&active_key);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let new_url = search_for_active_key(&active_key);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                // Only update URL if it actually changed
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("🔷 open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("🔴 close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Ключ таба из query string (`?active=...`)
fn active_key_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .filter(|key| !key.is_empty())
        .cloned()
}

fn search_for_active_key(active_key: &str) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([("active".to_string(), active_key.to_string())]))
            .unwrap_or_default();
    format!("?{}", query_string)
}

/// Заголовок таба до загрузки данных
fn initial_tab_title(key: &str) -> String {
    let label = super::tabs::tab_label_for_key(key);
    if label.is_empty() {
        key.to_string()
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_key_from_search() {
        assert_eq!(
            active_key_from_search("?active=a025_upd_document_detail_42"),
            Some("a025_upd_document_detail_42".to_string())
        );
        assert_eq!(active_key_from_search(""), None);
        assert_eq!(active_key_from_search("?active="), None);
        assert_eq!(active_key_from_search("?other=1"), None);
    }

    #[test]
    fn test_search_round_trip() {
        let key = "a025_upd_document_detail_6f1c3a52-9b0e-4d8e-b1a7-0c2f4e5d6a7b";
        let search = search_for_active_key(key);
        assert!(search.starts_with("?active="));
        assert_eq!(active_key_from_search(&search).as_deref(), Some(key));
    }
}
