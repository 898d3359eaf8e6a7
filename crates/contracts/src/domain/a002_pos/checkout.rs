//! Имитация оплаты на кассе: idle -> processing -> success -> idle.
//!
//! Задержки передаются снаружи функцией `sleep`, поэтому в браузере
//! работают таймеры gloo, а в тестах tokio с остановленным временем.
//! Закрытие диалога отменяет оплату через [`AbortSignal`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use futures::future::{select, Either};
use std::future::Future;
use std::pin::{pin, Pin};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll, Waker};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use super::cart::{Cart, CartLine, CartTotals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
    Wallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::Cash, PaymentMethod::Wallet];

    pub fn id(self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Wallet => "wallet",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Wallet => "Digital Wallet",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PaymentMethod::Card => "credit-card",
            PaymentMethod::Cash => "dollar",
            PaymentMethod::Wallet => "wallet",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

/// Сдача наличными, если получено больше итога
pub fn change_due(received: f64, total: f64) -> Option<f64> {
    if received > total {
        Some(received - total)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutTimings {
    pub processing: Duration,
    pub success_hold: Duration,
}

impl Default for CheckoutTimings {
    fn default() -> Self {
        Self {
            processing: Duration::from_millis(2000),
            success_hold: Duration::from_millis(1500),
        }
    }
}

// ============================================================================
// Receipt
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// "TRX-" + число 0..999999
    pub transaction_id: String,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub status: ReceiptStatus,
    pub lines: Vec<CartLine>,
}

impl Receipt {
    pub fn issue(request: &CheckoutRequest, now: DateTime<Utc>) -> Self {
        Self {
            transaction_id: transaction_id(),
            date: now,
            amount: request.totals.total,
            payment_method: request.method,
            status: ReceiptStatus::Completed,
            lines: request.lines.clone(),
        }
    }
}

fn transaction_id() -> String {
    format!("TRX-{}", Uuid::new_v4().as_u128() % 1_000_000)
}

// ============================================================================
// Abort
// ============================================================================

#[derive(Debug, Default)]
struct AbortState {
    aborted: AtomicBool,
    wakers: Mutex<Vec<Waker>>,
}

/// Флаг отмены, разделяемый диалогом и запущенной оплатой
#[derive(Debug, Clone, Default)]
pub struct AbortSignal(Arc<AbortState>);

impl AbortSignal {
    pub fn is_aborted(&self) -> bool {
        self.0.aborted.load(Ordering::SeqCst)
    }

    /// Future, который завершается в момент отмены
    pub fn aborted(&self) -> AbortFuture {
        AbortFuture(self.clone())
    }
}

pub struct AbortFuture(AbortSignal);

impl Future for AbortFuture {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let state = &(self.0).0;
        if state.aborted.load(Ordering::SeqCst) {
            return Poll::Ready(());
        }
        let mut wakers = state.wakers.lock().unwrap_or_else(|e| e.into_inner());
        // Повторная проверка под локом: abort мог успеть между load и lock
        if state.aborted.load(Ordering::SeqCst) {
            return Poll::Ready(());
        }
        if !wakers.iter().any(|w| w.will_wake(cx.waker())) {
            wakers.push(cx.waker().clone());
        }
        Poll::Pending
    }
}

#[derive(Debug, Clone, Default)]
pub struct AbortController {
    signal: AbortSignal,
}

impl AbortController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) -> AbortSignal {
        self.signal.clone()
    }

    pub fn abort(&self) {
        let state = &self.signal.0;
        let wakers = {
            let mut wakers = state.wakers.lock().unwrap_or_else(|e| e.into_inner());
            state.aborted.store(true, Ordering::SeqCst);
            std::mem::take(&mut *wakers)
        };
        for waker in wakers {
            waker.wake();
        }
    }
}

/// Пауза, прерываемая отменой. `true`, если пауза досчитана до конца.
async fn sleep_unless_aborted<F>(delay: F, signal: &AbortSignal) -> bool
where
    F: Future<Output = ()>,
{
    let delay = pin!(delay);
    let aborted = pin!(signal.aborted());
    match select(delay, aborted).await {
        Either::Left(_) => !signal.is_aborted(),
        Either::Right(_) => false,
    }
}

// ============================================================================
// Driver
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("checkout is already running")]
    AlreadyRunning,
    #[error("checkout was aborted")]
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    Processing,
    Success(Receipt),
}

impl CheckoutPhase {
    pub fn is_busy(&self) -> bool {
        !matches!(self, CheckoutPhase::Idle)
    }

    /// Подпись кнопки оплаты
    pub fn button_label(&self) -> &'static str {
        match self {
            CheckoutPhase::Idle => "Complete Payment",
            CheckoutPhase::Processing => "Processing...",
            CheckoutPhase::Success(_) => "Payment Successful!",
        }
    }
}

/// Снимок корзины на момент нажатия "оплатить"
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub method: PaymentMethod,
}

impl CheckoutRequest {
    pub fn from_cart(cart: &Cart, tax_rate: f64, method: PaymentMethod) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(Self {
            lines: cart.lines().to_vec(),
            totals: cart.totals(tax_rate),
            method,
        })
    }

    /// Повторный запуск, пока предыдущая оплата не вернулась в idle
    pub fn guard(phase: &CheckoutPhase) -> Result<(), CheckoutError> {
        if phase.is_busy() {
            Err(CheckoutError::AlreadyRunning)
        } else {
            Ok(())
        }
    }
}

/// Провести оплату.
///
/// Отмена во время `processing` сразу даёт `Err(Aborted)`: чек не выписан,
/// корзину трогать нельзя. Отмена во время показа успеха продажу не отменяет:
/// чек возвращается сразу, `on_phase` после отмены больше не вызывается.
pub async fn run_checkout<S, F, P>(
    request: CheckoutRequest,
    timings: CheckoutTimings,
    signal: AbortSignal,
    sleep: S,
    mut on_phase: P,
) -> Result<Receipt, CheckoutError>
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
    P: FnMut(&CheckoutPhase),
{
    if signal.is_aborted() {
        return Err(CheckoutError::Aborted);
    }

    on_phase(&CheckoutPhase::Processing);
    if !sleep_unless_aborted(sleep(timings.processing), &signal).await {
        log::info!("checkout: aborted while processing");
        return Err(CheckoutError::Aborted);
    }

    let receipt = Receipt::issue(&request, Utc::now());
    log::info!(
        "checkout: {} {:.2} via {}",
        receipt.transaction_id,
        receipt.amount,
        receipt.payment_method.id()
    );
    on_phase(&CheckoutPhase::Success(receipt.clone()));

    if sleep_unless_aborted(sleep(timings.success_hold), &signal).await {
        on_phase(&CheckoutPhase::Idle);
    }
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_pos::cart::CartAction;
    use crate::domain::a002_pos::seed::seed_products;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tokio::time::Instant;

    fn filled_cart() -> Cart {
        let products = seed_products();
        let mut cart = Cart::default();
        cart.reduce(CartAction::Add(products[0].clone()));
        cart.reduce(CartAction::Add(products[5].clone()));
        cart
    }

    fn phase_name(phase: &CheckoutPhase) -> &'static str {
        match phase {
            CheckoutPhase::Idle => "idle",
            CheckoutPhase::Processing => "processing",
            CheckoutPhase::Success(_) => "success",
        }
    }

    #[test]
    fn test_change_due() {
        assert_eq!(change_due(100.0, 87.5), Some(12.5));
        assert_eq!(change_due(87.5, 87.5), None);
        assert_eq!(change_due(0.0, 10.0), None);
    }

    #[test]
    fn test_payment_method_ids() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_id(method.id()), Some(method));
        }
        assert_eq!(PaymentMethod::from_id("cheque"), None);
        assert_eq!(serde_json::to_string(&PaymentMethod::Wallet).unwrap(), "\"wallet\"");
    }

    #[test]
    fn test_empty_cart_cannot_checkout() {
        let result = CheckoutRequest::from_cart(&Cart::default(), 0.1, PaymentMethod::Card);
        assert_eq!(result, Err(CheckoutError::EmptyCart));
        assert_eq!(
            CheckoutRequest::guard(&CheckoutPhase::Processing),
            Err(CheckoutError::AlreadyRunning)
        );
        assert!(CheckoutRequest::guard(&CheckoutPhase::Idle).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_phases_and_receipt() {
        let cart = filled_cart();
        let request = CheckoutRequest::from_cart(&cart, 0.1, PaymentMethod::Cash).unwrap();
        let phases = Rc::new(RefCell::new(Vec::new()));
        let seen = phases.clone();
        let started = Instant::now();
        let before = Utc::now();

        let receipt = run_checkout(
            request,
            CheckoutTimings::default(),
            AbortController::new().signal(),
            tokio::time::sleep,
            move |p| seen.borrow_mut().push(phase_name(p)),
        )
        .await
        .unwrap();

        assert_eq!(*phases.borrow(), vec!["processing", "success", "idle"]);
        assert!(started.elapsed() >= Duration::from_millis(3500));
        assert!(receipt.transaction_id.starts_with("TRX-"));
        let number: u32 = receipt.transaction_id[4..].parse().unwrap();
        assert!(number < 1_000_000);
        assert!(receipt.date >= before);
        assert_eq!(receipt.amount, cart.totals(0.1).total);
        assert_eq!(receipt.payment_method, PaymentMethod::Cash);
        assert_eq!(receipt.status, ReceiptStatus::Completed);
        assert_eq!(receipt.lines.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_during_processing() {
        let request = CheckoutRequest::from_cart(&filled_cart(), 0.1, PaymentMethod::Card).unwrap();
        let controller = AbortController::new();
        let phases = Rc::new(RefCell::new(Vec::new()));
        let seen = phases.clone();

        let aborter = controller.clone();
        let sleep = move |d: Duration| {
            // Диалог закрыли, пока шла обработка
            aborter.abort();
            tokio::time::sleep(d)
        };

        let result = run_checkout(
            request,
            CheckoutTimings::default(),
            controller.signal(),
            sleep,
            move |p| seen.borrow_mut().push(phase_name(p)),
        )
        .await;

        assert_eq!(result, Err(CheckoutError::Aborted));
        assert_eq!(*phases.borrow(), vec!["processing"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_during_success_hold_keeps_sale() {
        let request = CheckoutRequest::from_cart(&filled_cart(), 0.1, PaymentMethod::Wallet).unwrap();
        let controller = AbortController::new();
        let phases = Rc::new(RefCell::new(Vec::new()));
        let seen = phases.clone();
        let calls = Rc::new(RefCell::new(0u32));

        let aborter = controller.clone();
        let counter = calls.clone();
        let sleep = move |d: Duration| {
            *counter.borrow_mut() += 1;
            if *counter.borrow() == 2 {
                aborter.abort();
            }
            tokio::time::sleep(d)
        };

        let receipt = run_checkout(
            request,
            CheckoutTimings::default(),
            controller.signal(),
            sleep,
            move |p| seen.borrow_mut().push(phase_name(p)),
        )
        .await
        .unwrap();

        assert_eq!(receipt.payment_method, PaymentMethod::Wallet);
        assert_eq!(*phases.borrow(), vec!["processing", "success"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_aborted_signal_does_nothing() {
        let request = CheckoutRequest::from_cart(&filled_cart(), 0.1, PaymentMethod::Card).unwrap();
        let controller = AbortController::new();
        controller.abort();
        let mut calls = 0;
        let result = run_checkout(
            request,
            CheckoutTimings::default(),
            controller.signal(),
            tokio::time::sleep,
            |_| calls += 1,
        )
        .await;
        assert_eq!(result, Err(CheckoutError::Aborted));
        assert_eq!(calls, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_returns_without_waiting_for_delay() {
        let request = CheckoutRequest::from_cart(&filled_cart(), 0.1, PaymentMethod::Card).unwrap();
        let controller = AbortController::new();
        let started = Instant::now();

        let run = run_checkout(
            request,
            CheckoutTimings::default(),
            controller.signal(),
            tokio::time::sleep,
            |_| {},
        );
        let close_dialog = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            controller.abort();
        };
        let (result, _) = tokio::join!(run, close_dialog);

        assert_eq!(result, Err(CheckoutError::Aborted));
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(10));
        assert!(elapsed < Duration::from_millis(100), "returned after {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_in_success_hold_returns_receipt_at_once() {
        let request = CheckoutRequest::from_cart(&filled_cart(), 0.1, PaymentMethod::Cash).unwrap();
        let controller = AbortController::new();
        let started = Instant::now();

        let run = run_checkout(
            request,
            CheckoutTimings::default(),
            controller.signal(),
            tokio::time::sleep,
            |_| {},
        );
        let close_dialog = async {
            tokio::time::sleep(Duration::from_millis(2100)).await;
            controller.abort();
        };
        let (result, _) = tokio::join!(run, close_dialog);

        assert!(result.is_ok());
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(2100));
        assert!(elapsed < Duration::from_millis(2200), "returned after {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_abort_future_wakes_waiter() {
        let controller = AbortController::new();
        let signal = controller.signal();
        assert!(!signal.is_aborted());

        let waiter = tokio::spawn(async move { signal.aborted().await });
        tokio::task::yield_now().await;
        controller.abort();
        waiter.await.unwrap();
        assert!(controller.signal().is_aborted());
        // Уже отменённый сигнал готов сразу
        controller.signal().aborted().await;
    }
}
