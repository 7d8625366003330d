use serde::{Deserialize, Deserializer, Serialize};

pub type ProductId = u64;

/// Display attributes (title, price, image, ...) carried through untouched.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Product metadata as served by `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub id: ProductId,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl ProductDetails {
    pub fn into_cart_item(mut self, amount: u64) -> Product {
        self.attributes.remove("amount");
        Product {
            id: self.id,
            amount,
            attributes: self.attributes,
        }
    }
}

/// A cart line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub amount: u64,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Product {
    pub fn title(&self) -> Option<&str> {
        self.attributes.get("title").and_then(|v| v.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

/// Ordered, id-unique list of line items. Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart, keeping the first entry for any repeated id and
    /// dropping zero-amount entries.
    pub fn from_items(items: Vec<Product>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.amount > 0 && !cart.contains(item.id) {
                cart.items.push(item);
            }
        }
        cart
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    pub fn amount_of(&self, product_id: ProductId) -> u64 {
        self.find(product_id).map(|p| p.amount).unwrap_or(0)
    }

    /// Sum of all line amounts, saturating at `u64::MAX`.
    pub fn total_items(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |total, p| total.saturating_add(p.amount))
    }

    /// Returns a copy with the matching entry's amount replaced. Entries
    /// with other ids are untouched; an absent id yields an equal cart.
    pub fn with_amount(&self, product_id: ProductId, amount: u64) -> Self {
        let items = self
            .items
            .iter()
            .map(|p| {
                if p.id == product_id {
                    Product {
                        amount,
                        ..p.clone()
                    }
                } else {
                    p.clone()
                }
            })
            .collect();
        Self { items }
    }

    /// Returns a copy with `product` appended, or `None` if its id is taken.
    pub fn with_item(&self, product: Product) -> Option<Self> {
        if self.contains(product.id) {
            return None;
        }
        let mut items = self.items.clone();
        items.push(product);
        Some(Self { items })
    }

    pub fn without(&self, product_id: ProductId) -> Self {
        let items = self
            .items
            .iter()
            .filter(|p| p.id != product_id)
            .cloned()
            .collect();
        Self { items }
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Product>::deserialize(deserializer).map(Cart::from_items)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
