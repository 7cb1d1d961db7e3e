//! Блок «Информация о документе»

use super::super::view_model::UpdDocumentDetailsVm;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::table::format_currency_rub;
use crate::shared::date_utils::format_date_long;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn DocumentInfoSection(vm: UpdDocumentDetailsVm) -> impl IntoView {
    let total = vm.total();
    let unclassified_count = vm.unclassified_count();

    view! {
        {move || {
            let Some(doc) = vm.document.get() else {
                return view! { <div>"Нет данных"</div> }.into_any();
            };

            let inn = doc.counterparty_inn().map(str::to_string);
            let subdivision = doc.subdivision.clone().map(|s| s.name);
            let total_income = format_currency_rub(doc.total_income_or_zero());
            let total_expense = format_currency_rub(doc.total_expense_or_zero());

            view! {
                <CardAnimated delay_ms=0>
                    <h4 class="details-section__title">"Информация о документе"</h4>
                    <div class="detail-grid">
                        <div class="detail-grid__col">
                            <InfoField icon_name="file-text" label="Номер УПД">
                                {doc.document_number.clone()}
                            </InfoField>
                            <InfoField icon_name="calendar" label="Дата УПД">
                                {format_date_long(&doc.document_date)}
                            </InfoField>
                            <InfoField icon_name="building" label="Контрагент">
                                {doc.counterparty.name.clone()}
                                {inn.map(|inn| view! {
                                    <div style="font-size: var(--font-size-xs); color: var(--color-text-secondary);">
                                        {format!("ИНН: {}", inn)}
                                    </div>
                                })}
                            </InfoField>
                        </div>

                        <div class="detail-grid__col">
                            {subdivision.map(|name| view! {
                                <InfoField icon_name="map-pin" label="Подразделение">
                                    {name}
                                </InfoField>
                            })}

                            <div style="padding-top: var(--spacing-md); border-top: 1px solid var(--color-border-light);">
                                <div style="font-size: var(--font-size-xs); color: var(--color-text-secondary); margin-bottom: var(--spacing-sm);">
                                    "Суммы по документу"
                                </div>
                                <SumRow label="Доходы:" value=total_income color="var(--color-success)" />
                                <SumRow label="Расходы:" value=total_expense color="var(--color-error)" />
                                <div style="display: flex; justify-content: space-between; align-items: center; padding-top: var(--spacing-sm); margin-top: var(--spacing-sm); border-top: 1px solid var(--color-border-light);">
                                    <span style="font-size: var(--font-size-sm); font-weight: 500;">"Итого:"</span>
                                    <span style="font-size: var(--font-size-base); font-weight: 700;">
                                        {move || format_currency_rub(total.get())}
                                    </span>
                                </div>
                                <Show when=move || { unclassified_count.get() > 0 }>
                                    <div style="font-size: var(--font-size-xs); color: var(--color-text-muted); margin-top: var(--spacing-sm);">
                                        {move || format!(
                                            "Строк с неизвестным типом операции (не учтены в итоге): {}",
                                            unclassified_count.get()
                                        )}
                                    </div>
                                </Show>
                            </div>
                        </div>
                    </div>
                </CardAnimated>
            }
            .into_any()
        }}
    }
}

#[component]
fn InfoField(icon_name: &'static str, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: flex-start; gap: var(--spacing-sm); margin-bottom: var(--spacing-md);">
            <span style="color: var(--color-text-muted); margin-top: 2px;">{icon(icon_name)}</span>
            <div>
                <div style="font-size: var(--font-size-xs); color: var(--color-text-secondary);">{label}</div>
                <div style="font-size: var(--font-size-sm); font-weight: 500;">{children()}</div>
            </div>
        </div>
    }
}

#[component]
fn SumRow(label: &'static str, value: String, color: &'static str) -> impl IntoView {
    view! {
        <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: var(--spacing-xs);">
            <span style="font-size: var(--font-size-xs); color: var(--color-text-secondary);">{label}</span>
            <span style=format!("font-size: var(--font-size-sm); font-weight: 600; color: {};", color)>
                {value}
            </span>
        </div>
    }
}
