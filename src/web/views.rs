//! Display models passed to templates.
//!
//! Prices and dates are formatted here so templates only print strings.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::application::services::CheckoutInput;
use crate::domain::entities::{CartItem, CartSummary, Order, OrderLine, Product};
use crate::error::AppError;

pub struct ProductView {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub price: String,
    pub description: String,
    pub isbn: String,
    pub category: String,
    pub image: String,
    pub publisher: String,
    pub published_on: String,
    pub rating: Option<String>,
    pub reviews: Option<i64>,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            price: product.display_price(),
            published_on: product.display_published_on(),
            rating: product.rating.map(|r| format!("{r:.1}")),
            id: product.id,
            title: product.title,
            author: product.author,
            description: product.description,
            isbn: product.isbn,
            category: product.category,
            image: product.image,
            publisher: product.publisher,
            reviews: product.reviews,
        }
    }
}

/// Products of one category, in catalog order.
pub struct CategoryView {
    pub name: String,
    pub products: Vec<ProductView>,
}

/// Groups products by category, keeping the order in which categories first
/// appear.
pub fn group_by_category(products: Vec<Product>) -> Vec<CategoryView> {
    let mut groups: Vec<CategoryView> = Vec::new();

    for product in products {
        match groups.iter_mut().find(|g| g.name == product.category) {
            Some(group) => group.products.push(product.into()),
            None => groups.push(CategoryView {
                name: product.category.clone(),
                products: vec![product.into()],
            }),
        }
    }

    groups
}

pub struct CartLineView {
    pub line_id: i64,
    pub product_id: i64,
    pub title: String,
    pub author: String,
    pub image: String,
    pub unit_price: String,
    pub quantity: i64,
    pub total: String,
}

impl From<CartItem> for CartLineView {
    fn from(item: CartItem) -> Self {
        Self {
            unit_price: item.product.display_price(),
            total: item.display_total(),
            line_id: item.line.id,
            product_id: item.product.id,
            quantity: item.line.quantity,
            title: item.product.title,
            author: item.product.author,
            image: item.product.image,
        }
    }
}

pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub item_count: i64,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<CartSummary> for CartView {
    fn from(summary: CartSummary) -> Self {
        Self {
            total: summary.display_total(),
            item_count: summary.item_count(),
            lines: summary.items.into_iter().map(CartLineView::from).collect(),
        }
    }
}

pub struct OrderLineView {
    pub title: String,
    pub quantity: i64,
    pub unit_price: String,
    pub total: String,
}

impl From<&OrderLine> for OrderLineView {
    fn from(line: &OrderLine) -> Self {
        Self {
            title: line.title.clone(),
            quantity: line.quantity,
            unit_price: line.display_unit_price(),
            total: line.display_total(),
        }
    }
}

pub struct OrderView {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub email: String,
    pub lines: Vec<OrderLineView>,
    pub total: String,
    pub item_count: i64,
    pub placed_at: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            lines: order.lines.iter().map(OrderLineView::from).collect(),
            total: order.display_total(),
            item_count: order.item_count(),
            placed_at: order.created_at.format("%B %-d, %Y %H:%M UTC").to_string(),
            id: order.id,
            name: order.customer.name,
            address: order.customer.address,
            email: order.customer.email,
        }
    }
}

/// Per-field messages shown next to checkout inputs.
#[derive(Debug, Default)]
pub struct FieldErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, field: &str) -> bool {
        !self.get(field).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<&AppError> for FieldErrors {
    fn from(err: &AppError) -> Self {
        let fields = err
            .field_errors()
            .into_iter()
            .map(|(field, messages)| {
                let messages = match messages {
                    Value::Array(items) => items
                        .into_iter()
                        .filter_map(|m| m.as_str().map(str::to_string))
                        .collect(),
                    Value::String(message) => vec![message],
                    _ => Vec::new(),
                };
                (field, messages)
            })
            .collect();

        Self { fields }
    }
}

/// Values redisplayed in the checkout form.
#[derive(Debug, Default)]
pub struct CheckoutFormView {
    pub name: String,
    pub address: String,
    pub email: String,
}

impl From<&CheckoutInput> for CheckoutFormView {
    fn from(input: &CheckoutInput) -> Self {
        Self {
            name: input.name.clone(),
            address: input.address.clone(),
            email: input.email.clone(),
        }
    }
}
