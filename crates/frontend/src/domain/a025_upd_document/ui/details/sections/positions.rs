//! Блок «Позиции документа»: Приемка → Позиция → Группа работ → Доходы/Расходы

use super::super::view_model::UpdDocumentDetailsVm;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::table::format_amount;
use contracts::domain::a026_reception::{
    PositionGroup, ReceptionGroup, ReceptionItemDto, TransactionKind, WorkGroup,
};
use leptos::prelude::*;

#[component]
pub fn PositionsSection(vm: UpdDocumentDetailsVm) -> impl IntoView {
    let grouped = vm.grouped();
    let items_count = vm.items_count();

    view! {
        <CardAnimated delay_ms=40>
            <h4 class="details-section__title">
                {move || format!("Позиции документа ({})", items_count.get())}
            </h4>
            <Show
                when=move || { items_count.get() > 0 }
                fallback=|| view! {
                    <div style="text-align: center; padding: var(--spacing-xl); font-size: var(--font-size-xs); color: var(--color-text-secondary);">
                        "Нет позиций в данном УПД"
                    </div>
                }
            >
                <div style="display: flex; flex-direction: column; gap: var(--spacing-md);">
                    {move || {
                        grouped
                            .get()
                            .into_iter()
                            .map(|reception| view! { <ReceptionBlock reception=reception /> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </CardAnimated>
    }
}

#[component]
fn ReceptionBlock(reception: ReceptionGroup) -> impl IntoView {
    view! {
        <div style="border: 1px solid var(--color-border); border-radius: var(--radius-md); overflow: hidden;">
            <div style="background: var(--color-bg-secondary); padding: var(--spacing-sm) var(--spacing-md); border-bottom: 1px solid var(--color-border);">
                <h3 style="margin: 0; font-size: var(--font-size-xs); font-weight: 600;">
                    {format!("Приемка: {}", reception.reception_number)}
                </h3>
            </div>
            {reception
                .positions
                .into_iter()
                .map(|position| view! { <PositionBlock position=position /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn PositionBlock(position: PositionGroup) -> impl IntoView {
    let (service_description, inventory_number, subdivision_name) = position
        .first_item()
        .map(|item| {
            (
                item.service_description.clone(),
                item.inventory_number.clone(),
                item.subdivision_name.clone(),
            )
        })
        .unwrap_or_default();

    let inventory = inventory_number
        .filter(|inv| !inv.is_empty())
        .unwrap_or_else(|| "Не указан".to_string());
    let mut subtitle = format!("Инв. №: {}", inventory);
    if let Some(subdivision) = subdivision_name.filter(|s| !s.is_empty()) {
        subtitle.push_str(&format!(" | {}", subdivision));
    }

    view! {
        <div style="border-bottom: 1px solid var(--color-border-light);">
            <div style="background: var(--color-neutral-50); padding: var(--spacing-sm) var(--spacing-md);">
                <div style="font-size: var(--font-size-xs); font-weight: 500;">
                    {format!("Позиция {}: {}", position.position_number, service_description)}
                </div>
                <div style="font-size: var(--font-size-xs); color: var(--color-text-secondary); margin-top: 2px;">
                    {subtitle}
                </div>
            </div>
            {position
                .work_groups
                .into_iter()
                .map(|group| view! { <WorkGroupBlock group=group /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn WorkGroupBlock(group: WorkGroup) -> impl IntoView {
    let income: Vec<ReceptionItemDto> = group.income_items().into_iter().cloned().collect();
    let expense: Vec<ReceptionItemDto> = group.expense_items().into_iter().cloned().collect();

    view! {
        <div style="padding: var(--spacing-sm) var(--spacing-md);">
            <div style="font-size: var(--font-size-xs); font-weight: 500; color: var(--color-text-secondary); margin-bottom: var(--spacing-sm);">
                {group.label}
            </div>
            <TransactionList kind=TransactionKind::Income items=income />
            <TransactionList kind=TransactionKind::Expense items=expense />
        </div>
    }
}

/// Подсписок «Доходы ↗» или «Расходы ↘»; пустой не выводится
#[component]
fn TransactionList(kind: TransactionKind, items: Vec<ReceptionItemDto>) -> impl IntoView {
    let (arrow, title, color) = match kind {
        TransactionKind::Income => ("↗", "Доходы", "var(--color-success)"),
        _ => ("↘", "Расходы", "var(--color-error)"),
    };

    (!items.is_empty()).then(move || view! {
        <div style="margin-bottom: var(--spacing-sm);">
            <div style=format!("display: flex; align-items: center; gap: 4px; font-size: var(--font-size-xs); font-weight: 500; color: {};", color)>
                <span>{arrow}</span>
                <span>{title}</span>
            </div>
            {items
                .into_iter()
                .map(|item| view! { <ItemLine item=item kind=kind /> })
                .collect_view()}
        </div>
    })
}

#[component]
fn ItemLine(item: ReceptionItemDto, kind: TransactionKind) -> impl IntoView {
    let (sign, color) = match kind {
        TransactionKind::Income => ("+", "var(--color-success-700)"),
        _ => ("-", "var(--color-error-700)"),
    };
    let quantity = item.quantity.map(format_amount).unwrap_or_default();
    let amount = format!("{} {} ₽", sign, format_amount(item.amount()));
    let price = format!("{} ₽/шт", format_amount(item.effective_price()));

    view! {
        <div style="padding: 6px var(--spacing-sm); border-radius: var(--radius-sm);">
            <div style="display: flex; align-items: center; justify-content: space-between; gap: var(--spacing-md);">
                <p style="margin: 0; flex: 1; font-size: var(--font-size-xs);">{item.item_description}</p>
                <p style="margin: 0; font-size: var(--font-size-xs); font-weight: 500; color: var(--color-text-secondary);">
                    {quantity}
                </p>
            </div>
            <div style="margin-top: 2px; display: flex; align-items: center; gap: var(--spacing-sm);">
                <span style=format!("font-size: var(--font-size-xs); font-weight: 500; color: {};", color)>
                    {amount}
                </span>
                <span style="font-size: var(--font-size-xs); color: var(--color-text-muted);">"•"</span>
                <span style="font-size: var(--font-size-xs); color: var(--color-text-secondary);">
                    {price}
                </span>
            </div>
        </div>
    }
}
