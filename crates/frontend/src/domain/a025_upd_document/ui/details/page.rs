//! Main page component for UPD document details (MVVM Standard)

use super::sections::{DocumentInfoSection, PositionsSection};
use super::view_model::UpdDocumentDetailsVm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a025_upd_document::UpdDocument;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn UpdDocumentDetail(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let vm = UpdDocumentDetailsVm::new();
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let stored_id = StoredValue::new(id.clone());

    vm.load(id);

    let title = vm.title();
    Effect::new(move || {
        let tab_title = title.get();
        let tab_key = UpdDocument::detail_tab_key(&stored_id.get_value());
        tabs_store.update_tab_title(&tab_key, &tab_title);
    });

    let not_found = vm.not_found();
    let vm_content = vm.clone();

    view! {
        <PageFrame page_id="a025_upd_document--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || title.get()}</h1>
                </div>
                <div class="page__header-right">
                    <BackButton on_close=on_close />
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if vm.loading.get() {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                                <Spinner />
                                <span>"Загрузка..."</span>
                            </Flex>
                        }
                        .into_any()
                    } else if not_found.get() {
                        view! {
                            <div style="padding: var(--spacing-lg); background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: var(--radius-sm); color: var(--color-error); margin: var(--spacing-lg);">
                                "УПД не найден"
                            </div>
                            <div style="margin: 0 var(--spacing-lg);">
                                <BackButton on_close=on_close />
                            </div>
                        }
                        .into_any()
                    } else if let Some(err) = vm.error.get() {
                        view! {
                            <div style="padding: var(--spacing-lg); background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: var(--radius-sm); color: var(--color-error); margin: var(--spacing-lg);">
                                <strong>"Ошибка загрузки данных УПД: "</strong>{err}
                            </div>
                            <div style="margin: 0 var(--spacing-lg);">
                                <BackButton on_close=on_close />
                            </div>
                        }
                        .into_any()
                    } else if vm.document.get().is_some() {
                        let vm_content = vm_content.clone();
                        view! {
                            <Flex vertical=true gap=FlexGap::Large>
                                <DocumentInfoSection vm=vm_content.clone() />
                                <PositionsSection vm=vm_content.clone() />
                            </Flex>
                        }
                        .into_any()
                    } else {
                        view! { <div>"Нет данных"</div> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn BackButton(on_close: Callback<()>) -> impl IntoView {
    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            size=ButtonSize::Medium
            on_click=move |_| on_close.run(())
        >
            {icon("arrow-left")} "Вернуться к архиву"
        </Button>
    }
}
