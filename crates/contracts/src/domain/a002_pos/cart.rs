//! Корзина кассы: строки товар + количество, итоги с налогом

use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId};
use crate::shared::money::round_cents;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl CartTotals {
    /// Налог и итог округляются до центов
    pub fn compute(subtotal: f64, tax_rate: f64) -> Self {
        let subtotal = round_cents(subtotal);
        let tax = round_cents(subtotal * tax_rate);
        Self {
            subtotal,
            tax,
            total: round_cents(subtotal + tax),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    Add(Product),
    /// Количество <= 0 удаляет строку
    SetQuantity { id: ProductId, quantity: i64 },
    Remove(ProductId),
    Clear,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Число единиц товара во всех строках
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.lines
            .iter()
            .find(|l| &l.product.id == id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn totals(&self, tax_rate: f64) -> CartTotals {
        CartTotals::compute(self.subtotal(), tax_rate)
    }

    pub fn reduce(&mut self, action: CartAction) {
        match action {
            CartAction::Add(product) => self.add(product),
            CartAction::SetQuantity { id, quantity } => self.set_quantity(&id, quantity),
            CartAction::Remove(id) => self.remove(&id),
            CartAction::Clear => self.lines.clear(),
        }
    }

    /// Списывает проданные строки чека. То, что добавили в корзину
    /// во время оплаты, остаётся.
    pub fn settle(&mut self, sold: &[CartLine]) {
        for sold in sold {
            if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == sold.product.id) {
                line.quantity = line.quantity.saturating_sub(sold.quantity);
            }
        }
        self.lines.retain(|l| l.quantity > 0);
    }

    fn add(&mut self, product: Product) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine {
                product,
                quantity: 1,
            }),
        }
    }

    fn set_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == id) {
            line.quantity = quantity;
        }
    }

    fn remove(&mut self, id: &ProductId) {
        self.lines.retain(|l| &l.product.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price,
            image: String::new(),
            category: "Electronics".into(),
            stock: 10,
            barcode: format!("000{}", id),
        }
    }

    #[test]
    fn test_settle_keeps_lines_added_after_checkout() {
        let a = product("a", 10.0);
        let b = product("b", 5.0);
        let mut cart = Cart::default();
        cart.reduce(CartAction::Add(a.clone()));
        let sold = cart.lines().to_vec();

        cart.reduce(CartAction::Add(a));
        cart.reduce(CartAction::Add(b));
        cart.settle(&sold);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.quantity_of(&ProductId::new("a")), 1);
        assert_eq!(cart.quantity_of(&ProductId::new("b")), 1);

        let rest = cart.lines().to_vec();
        cart.settle(&rest);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_with_ten_percent_tax() {
        let mut cart = Cart::default();
        let a = product("a", 10.0);
        cart.reduce(CartAction::Add(a.clone()));
        cart.reduce(CartAction::Add(a));
        cart.reduce(CartAction::Add(product("b", 5.0)));

        let totals = cart.totals(0.1);
        assert_eq!(totals.subtotal, 25.0);
        assert_eq!(totals.tax, 2.5);
        assert_eq!(totals.total, 27.5);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_adding_twice_gives_single_line() {
        let mut cart = Cart::default();
        let p = product("1", 79.99);
        cart.reduce(CartAction::Add(p.clone()));
        cart.reduce(CartAction::Add(p.clone()));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(&p.id), 2);
    }

    #[test]
    fn test_zero_or_negative_quantity_removes_line() {
        let mut cart = Cart::default();
        cart.reduce(CartAction::Add(product("1", 1.0)));
        cart.reduce(CartAction::Add(product("2", 1.0)));

        cart.reduce(CartAction::SetQuantity {
            id: ProductId::new("1"),
            quantity: 0,
        });
        assert_eq!(cart.lines().len(), 1);
        cart.reduce(CartAction::SetQuantity {
            id: ProductId::new("2"),
            quantity: -1,
        });
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_remove_and_clear() {
        let mut cart = Cart::default();
        cart.reduce(CartAction::Add(product("1", 2.0)));
        cart.reduce(CartAction::Add(product("2", 3.0)));
        cart.reduce(CartAction::SetQuantity {
            id: ProductId::new("1"),
            quantity: 4,
        });
        assert_eq!(cart.subtotal(), 11.0);

        // Неизвестный товар ничего не меняет
        cart.reduce(CartAction::SetQuantity {
            id: ProductId::new("9"),
            quantity: 4,
        });
        assert_eq!(cart.lines().len(), 2);

        cart.reduce(CartAction::Remove(ProductId::new("2")));
        assert_eq!(cart.subtotal(), 8.0);
        cart.reduce(CartAction::Clear);
        assert!(cart.is_empty());
        assert_eq!(cart.totals(0.1), CartTotals::default());
    }

    #[test]
    fn test_tax_rounds_to_cents() {
        let totals = CartTotals::compute(79.99, 0.1);
        assert_eq!(totals.tax, 8.0);
        assert_eq!(totals.total, 87.99);
    }
}
