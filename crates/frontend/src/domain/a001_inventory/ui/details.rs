use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::badge::ToneBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::a001_inventory::aggregate::{InventoryItem, InventoryItemDto};
use contracts::domain::a001_inventory::category::{sub_categories_for, CATEGORY_OPTIONS};
use contracts::domain::a001_inventory::store::InventoryAction;
use contracts::shared::money::format_percent;
use contracts::store::AppAction;
use leptos::prelude::*;
use thaw::*;

type Getter = fn(&InventoryItemDto) -> String;
type Setter = fn(&mut InventoryItemDto, String);

/// Текстовое поле формы, привязанное к одному полю DTO
fn form_field(
    form: RwSignal<InventoryItemDto>,
    label: &'static str,
    input_type: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

/// Диалог создания и редактирования позиции
#[component]
pub fn ItemFormDialog(open: RwSignal<bool>, form: RwSignal<InventoryItemDto>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let error = RwSignal::new(None::<String>);

    let is_edit = move || form.with(|f| f.id.is_some());

    let save = move |_| {
        let dto = form.get_untracked();
        match ctx.dispatch(AppAction::Inventory(InventoryAction::Save(dto))) {
            Ok(()) => {
                error.set(None);
                open.set(false);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let cancel = move |_| {
        error.set(None);
        open.set(false);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || if is_edit() { "Edit Item" } else { "Add New Item" }}
                    </DialogTitle>
                    <DialogContent>
                        {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                        <div class="details-form details-form--grid">
                            {form_field(form, "SKU", "text", |f| f.sku.clone(), |f, v| f.sku = v)}
                            {form_field(form, "Name", "text", |f| f.name.clone(), |f, v| f.name = v)}

                            <div class="form-group">
                                <label>"Category"</label>
                                <select
                                    prop:value=move || form.with(|f| f.category.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.set_category(&value));
                                    }
                                >
                                    {CATEGORY_OPTIONS
                                        .into_iter()
                                        .map(|c| view! { <option value=c>{c}</option> })
                                        .collect_view()}
                                </select>
                            </div>

                            <div class="form-group">
                                <label>"Sub-Category"</label>
                                <select
                                    prop:value=move || form.with(|f| f.sub_category.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.sub_category = value);
                                    }
                                >
                                    <option value="">"Select sub-category"</option>
                                    {move || {
                                        let category = form.with(|f| f.category.clone());
                                        sub_categories_for(&category)
                                            .iter()
                                            .map(|s| view! { <option value=*s>{*s}</option> })
                                            .collect_view()
                                    }}
                                </select>
                            </div>

                            {form_field(form, "Quantity", "number", |f| f.quantity.clone(), |f, v| f.quantity = v)}
                            {form_field(form, "Reorder Point", "number", |f| f.reorder_point.clone(), |f, v| f.reorder_point = v)}
                            {form_field(form, "Cost ($)", "number", |f| f.cost.clone(), |f, v| f.cost = v)}
                            {form_field(form, "Price ($)", "number", |f| f.price.clone(), |f, v| f.price = v)}
                            {form_field(form, "Supplier", "text", |f| f.supplier.clone(), |f, v| f.supplier = v)}
                        </div>

                        <div class="form-group">
                            <label>"Description"</label>
                            <textarea
                                rows="3"
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.description = value);
                                }
                            />
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=cancel>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=save>
                            {icon("save")}
                            {move || if is_edit() { "Save Changes" } else { "Add Item" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

fn detail_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-row">
            <span class="detail-row__label">{label}</span>
            <span class="detail-row__value">{value}</span>
        </div>
    }
}

/// Просмотр позиции с наценкой
#[component]
pub fn ItemViewDialog(
    open: RwSignal<bool>,
    item: RwSignal<Option<InventoryItem>>,
    on_edit: Callback<InventoryItem>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let edit = move |_| {
        if let Some(current) = item.get_untracked() {
            on_edit.run(current);
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || item.with(|i| i.as_ref().map(|i| i.name.clone()).unwrap_or_default())}
                    </DialogTitle>
                    <DialogContent>
                        {move || item.get().map(|i| {
                            let dash = || "-".to_string();
                            view! {
                                <div class="details-view">
                                    <div class="details-view__status">
                                        <ToneBadge tone=i.status.tone() label=i.status.label() />
                                    </div>
                                    {detail_row("SKU", i.sku.clone())}
                                    {detail_row("Category", format!("{} / {}", i.category, i.sub_category))}
                                    {detail_row("Quantity", i.quantity.to_string())}
                                    {detail_row("Reorder Point", i.reorder_point.to_string())}
                                    {detail_row("Cost", ctx.money(i.cost))}
                                    {detail_row("Price", ctx.money(i.price))}
                                    {detail_row("Margin", format_percent(i.margin_percent(), 1))}
                                    {detail_row("Stock Value", ctx.money(i.stock_value()))}
                                    {detail_row("Supplier", i.supplier.clone().unwrap_or_else(dash))}
                                    {detail_row(
                                        "Last Restocked",
                                        i.last_restocked.as_deref().map(format_date).unwrap_or_else(dash),
                                    )}
                                    {i.description.clone().map(|d| view! {
                                        <p class="details-view__description">{d}</p>
                                    })}
                                </div>
                            }
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Close"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=edit>
                            {icon("edit")}
                            "Edit"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
