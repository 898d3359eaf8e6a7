use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::format_receipt_time;
use crate::shared::icons::icon;
use contracts::domain::a002_pos::checkout::{
    change_due, run_checkout, AbortController, CheckoutError, CheckoutPhase, CheckoutRequest,
    PaymentMethod,
};
use contracts::shared::numeric::parse_f64_or_zero;
use contracts::store::AppAction;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::time::Duration;
use thaw::*;

fn sleep(duration: Duration) -> TimeoutFuture {
    TimeoutFuture::new(u32::try_from(duration.as_millis()).unwrap_or(u32::MAX))
}

/// Отменяет текущую оплату, если она есть. Работает и на уже освобождённом владельце.
fn abort_active(controller: StoredValue<Option<AbortController>>) {
    controller.try_with_value(|c| {
        if let Some(c) = c {
            c.abort();
        }
    });
}

/// Сброс диалога после выписанного чека. Диалог к этому моменту может быть размонтирован.
fn finish_sale(
    phase: RwSignal<CheckoutPhase>,
    cash_received: RwSignal<String>,
    open: RwSignal<bool>,
    on_completed: Callback<()>,
) {
    phase.try_set(CheckoutPhase::Idle);
    cash_received.try_set(String::new());
    open.try_set(false);
    on_completed.try_run(());
}

/// Диалог оплаты. Закрытие во время оплаты отменяет её.
#[component]
pub fn CheckoutDialog(open: RwSignal<bool>, on_completed: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let method = RwSignal::new(PaymentMethod::Card);
    let cash_received = RwSignal::new(String::new());
    let phase = RwSignal::new(CheckoutPhase::Idle);
    let error = RwSignal::new(None::<String>);
    let controller = StoredValue::new(None::<AbortController>);

    let totals = Signal::derive(move || ctx.store.with(|s| s.cart.totals(s.config.tax_rate)));
    let change = Signal::derive(move || {
        change_due(parse_f64_or_zero(&cash_received.get()), totals.get().total)
    });

    // Ушли со страницы кассы: незавершённая оплата отменяется,
    // продажа засчитывается только если чек уже выписан
    on_cleanup(move || abort_active(controller));

    // Закрыли диалог: текущая оплата больше не шлёт фаз
    Effect::new(move |_| {
        if !open.get() {
            abort_active(controller);
            controller.set_value(None);
            if matches!(phase.get_untracked(), CheckoutPhase::Processing) {
                phase.set(CheckoutPhase::Idle);
            }
            error.set(None);
        }
    });

    let complete = move |_| {
        if let Err(e) = CheckoutRequest::guard(&phase.get_untracked()) {
            log::warn!("checkout: {}", e);
            return;
        }
        let (cart, config) = ctx.store.with_untracked(|s| (s.cart.clone(), s.config.clone()));
        let request = match CheckoutRequest::from_cart(&cart, config.tax_rate, method.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        let abort = AbortController::new();
        let signal = abort.signal();
        controller.set_value(Some(abort));
        error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            let result = run_checkout(request, config.checkout_timings(), signal, sleep, move |p| {
                phase.try_set(p.clone());
            })
            .await;

            match result {
                Ok(receipt) => {
                    // Хранилище живёт на уровне приложения, диалог мог быть уже размонтирован
                    let _ = ctx.dispatch(AppAction::SaleCompleted(receipt));
                    finish_sale(phase, cash_received, open, on_completed);
                }
                // Фазу уже сбросило закрытие диалога
                Err(CheckoutError::Aborted) => {}
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    let method_button = move |m: PaymentMethod| {
        view! {
            <button
                class="payment-method"
                class:payment-method--active=move || method.get() == m
                disabled=move || phase.get().is_busy()
                on:click=move |_| method.set(m)
            >
                {icon(m.icon())}
                <span>{m.label()}</span>
            </button>
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Complete Payment"</DialogTitle>
                    <DialogContent>
                        <div class="checkout">
                            <div class="checkout__amount">
                                <span class="text-muted">"Amount due"</span>
                                <span class="checkout__total">{move || ctx.money(totals.get().total)}</span>
                            </div>

                            <Label>"Payment Method"</Label>
                            <div class="payment-methods">
                                {PaymentMethod::ALL.into_iter().map(method_button).collect_view()}
                            </div>

                            <Show when=move || method.get() == PaymentMethod::Cash>
                                <div class="form-group">
                                    <label>"Cash Received"</label>
                                    <input
                                        type="number"
                                        min="0"
                                        step="0.01"
                                        placeholder="0.00"
                                        prop:value=move || cash_received.get()
                                        on:input=move |ev| cash_received.set(event_target_value(&ev))
                                    />
                                </div>
                                {move || change.get().map(|c| view! {
                                    <div class="checkout__change">
                                        <span>"Change Due"</span>
                                        <span>{ctx.money(c)}</span>
                                    </div>
                                })}
                            </Show>

                            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                            {move || match phase.get() {
                                CheckoutPhase::Processing => view! {
                                    <div class="checkout__status">
                                        <Spinner />
                                        <span>"Processing payment..."</span>
                                    </div>
                                }
                                .into_any(),
                                CheckoutPhase::Success(receipt) => view! {
                                    <div class="checkout__status checkout__status--success">
                                        {icon("check-circle")}
                                        <span>{format!("Payment received, {}", receipt.transaction_id)}</span>
                                    </div>
                                }
                                .into_any(),
                                CheckoutPhase::Idle => ().into_any(),
                            }}
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || phase.get().is_busy())
                            on_click=complete
                        >
                            {move || phase.get().button_label()}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// Чек последней продажи
#[component]
pub fn ReceiptDialog(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let receipt = Signal::derive(move || ctx.store.with(|s| s.last_receipt.clone()));

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Receipt"</DialogTitle>
                    <DialogContent>
                        {move || receipt.get().map(|r| view! {
                            <div class="receipt">
                                <div class="receipt__header">
                                    {icon("check-circle")}
                                    <span>"Payment Successful"</span>
                                </div>
                                <div class="detail-row">
                                    <span class="detail-row__label">"Transaction"</span>
                                    <span class="detail-row__value">{r.transaction_id.clone()}</span>
                                </div>
                                <div class="detail-row">
                                    <span class="detail-row__label">"Date"</span>
                                    <span class="detail-row__value">{format_receipt_time(&r.date)}</span>
                                </div>
                                <div class="detail-row">
                                    <span class="detail-row__label">"Payment Method"</span>
                                    <span class="detail-row__value">{r.payment_method.label()}</span>
                                </div>
                                <div class="receipt__lines">
                                    {r.lines
                                        .iter()
                                        .map(|line| view! {
                                            <div class="receipt__line">
                                                <span>{format!("{} x{}", line.product.name, line.quantity)}</span>
                                                <span>{ctx.money(line.line_total())}</span>
                                            </div>
                                        })
                                        .collect_view()}
                                </div>
                                <div class="totals-row totals-row--total">
                                    <span>"Total Paid"</span>
                                    <span>{ctx.money(r.amount)}</span>
                                </div>
                            </div>
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open.set(false)>
                            "Done"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_cleanup_aborts_running_checkout() {
        let owner = Owner::new();
        let signal = owner.with(|| {
            let controller = StoredValue::new(None::<AbortController>);
            on_cleanup(move || abort_active(controller));
            let abort = AbortController::new();
            let signal = abort.signal();
            controller.set_value(Some(abort));
            signal
        });
        assert!(!signal.is_aborted());
        owner.cleanup();
        assert!(signal.is_aborted());
    }

    #[test]
    fn test_finish_sale_resets_dialog() {
        let owner = Owner::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let (phase, cash, open, done) = owner.with(|| {
            let calls = calls.clone();
            (
                RwSignal::new(CheckoutPhase::Processing),
                RwSignal::new("100".to_string()),
                RwSignal::new(true),
                Callback::new(move |_: ()| {
                    calls.fetch_add(1, Ordering::SeqCst);
                }),
            )
        });
        finish_sale(phase, cash, open, done);
        assert_eq!(phase.get_untracked(), CheckoutPhase::Idle);
        assert!(cash.get_untracked().is_empty());
        assert!(!open.get_untracked());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_finish_sale_after_unmount_is_noop() {
        let owner = Owner::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let (phase, cash, open, done) = owner.with(|| {
            let calls = calls.clone();
            (
                RwSignal::new(CheckoutPhase::Processing),
                RwSignal::new(String::new()),
                RwSignal::new(true),
                Callback::new(move |_: ()| {
                    calls.fetch_add(1, Ordering::SeqCst);
                }),
            )
        });
        owner.cleanup();
        finish_sale(phase, cash, open, done);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(open.try_get_untracked().is_none());
    }
}
