use crate::core::messages::{MessagePolicy, Operation, PortugueseMessages};
use crate::core::{
    Cart, CartRepository, Notifier, ProductFetcher, ProductId, Result, StockChecker,
    UpdateProductAmount,
};
use crate::utils::error::CartError;
use tokio::sync::{Mutex, RwLock};

/// Owns the authoritative cart.
///
/// Every mutation holds the cart lock from its first read to its commit,
/// stock and product fetches included, so concurrent callers are applied one
/// after another. A commit saves the new cart before it replaces the
/// in-memory one: when the save fails, memory keeps the last persisted cart.
///
/// Readers go through a separate snapshot that is only replaced at commit,
/// so [`cart`](Self::cart) never waits on an in-flight fetch.
///
/// Failures are rendered through the [`MessagePolicy`] and handed to the
/// [`Notifier`]; the same error is returned so callers can inspect its
/// [`category`](CartError::category).
pub struct CartStore<A, R, N> {
    catalog: A,
    repository: R,
    notifier: N,
    messages: Box<dyn MessagePolicy>,
    cart: Mutex<Cart>,
    snapshot: RwLock<Cart>,
}

impl<A, R, N> CartStore<A, R, N>
where
    A: StockChecker + ProductFetcher,
    R: CartRepository,
    N: Notifier,
{
    /// Loads the persisted cart, starting empty when nothing was stored.
    pub async fn init(catalog: A, repository: R, notifier: N) -> Result<Self> {
        let cart = repository.load().await?.unwrap_or_default();
        tracing::debug!("Cart initialized with {} item(s)", cart.len());

        Ok(Self {
            catalog,
            repository,
            notifier,
            messages: Box::new(PortugueseMessages),
            snapshot: RwLock::new(cart.clone()),
            cart: Mutex::new(cart),
        })
    }

    pub fn with_messages(mut self, messages: Box<dyn MessagePolicy>) -> Self {
        self.messages = messages;
        self
    }

    /// Read-only snapshot of the current cart.
    pub async fn cart(&self) -> Cart {
        self.snapshot.read().await.clone()
    }

    pub async fn add_product(&self, product_id: ProductId) -> Result<()> {
        let mut cart = self.cart.lock().await;

        let result = match self.cart_with_added(&cart, product_id).await {
            Ok(next) => self.commit(&mut cart, next).await,
            Err(e) => Err(e),
        };

        self.settle(Operation::Add, product_id, result)
    }

    pub async fn remove_product(&self, product_id: ProductId) -> Result<()> {
        let mut cart = self.cart.lock().await;

        let result = if cart.contains(product_id) {
            let next = cart.without(product_id);
            self.commit(&mut cart, next).await
        } else {
            Err(CartError::ProductNotInCart { product_id })
        };

        self.settle(Operation::Remove, product_id, result)
    }

    /// Sets the amount of a line to exactly `request.amount`.
    ///
    /// Zero or negative amounts are ignored without notification; removing
    /// a line is done with [`remove_product`](Self::remove_product).
    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> Result<()> {
        let UpdateProductAmount { product_id, amount } = request;
        if amount <= 0 {
            tracing::debug!("Ignoring non-positive amount {} for product {}", amount, product_id);
            return Ok(());
        }
        let amount = amount.unsigned_abs();

        let mut cart = self.cart.lock().await;

        let result = match self.ensure_in_stock(product_id, amount).await {
            Ok(()) => {
                let next = cart.with_amount(product_id, amount);
                self.commit(&mut cart, next).await
            }
            Err(e) => Err(e),
        };

        self.settle(Operation::Update, product_id, result)
    }

    async fn cart_with_added(&self, cart: &Cart, product_id: ProductId) -> Result<Cart> {
        let current = cart.amount_of(product_id);
        let desired = current.checked_add(1).ok_or(CartError::OutOfStock {
            product_id,
            requested: u64::MAX,
            available: current,
        })?;
        self.ensure_in_stock(product_id, desired).await?;

        if cart.contains(product_id) {
            return Ok(cart.with_amount(product_id, desired));
        }

        let details = self.catalog.get_product(product_id).await?;
        if details.id != product_id {
            tracing::warn!(
                "Catalog answered product {} for requested id {}",
                details.id,
                product_id
            );
            return Err(CartError::ProductNotFound { product_id });
        }

        cart.with_item(details.into_cart_item(1))
            .ok_or(CartError::ProductNotFound { product_id })
    }

    async fn ensure_in_stock(&self, product_id: ProductId, requested: u64) -> Result<()> {
        let stock = self.catalog.get_stock(product_id).await?;
        // Equal to stock is still allowed.
        if requested > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested,
                available: stock.amount,
            });
        }
        Ok(())
    }

    async fn commit(&self, cart: &mut Cart, next: Cart) -> Result<()> {
        self.repository.save(&next).await?;
        *self.snapshot.write().await = next.clone();
        *cart = next;
        tracing::debug!(
            "Cart committed: {} line(s), {} item(s)",
            cart.len(),
            cart.total_items()
        );
        Ok(())
    }

    fn settle(&self, operation: Operation, product_id: ProductId, result: Result<()>) -> Result<()> {
        if let Err(e) = &result {
            if e.is_out_of_stock() {
                tracing::warn!("{} rejected for product {}: {}", operation, product_id, e);
            } else {
                tracing::error!(
                    "{} failed for product {}: {} (Category: {:?})",
                    operation,
                    product_id,
                    e,
                    e.category()
                );
            }
            self.notifier.error(&self.messages.render(operation, e));
        }
        result
    }
}
