//! Async persistence traits.

use async_trait::async_trait;
use qist_shared::types::{SaleId, UserId};

use crate::account::{Account, Expense, Investor};
use crate::sale::Sale;

use super::error::StoreError;

/// Durable storage for sales and their payment plans.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SaleStore: Send + Sync {
    /// All sales belonging to a user.
    async fn fetch_sales(&self, user_id: UserId) -> Result<Vec<Sale>, StoreError>;

    /// A single sale by id.
    ///
    /// # Errors
    ///
    /// `StoreError::SaleNotFound` when the id is unknown.
    async fn load_sale(&self, sale_id: SaleId) -> Result<Sale, StoreError>;

    /// Persists a sale, replacing any existing record with the same id.
    async fn save_sale(&self, sale: &Sale) -> Result<(), StoreError>;

    /// Removes a sale and its payment plan.
    async fn delete_sale(&self, sale_id: SaleId) -> Result<(), StoreError>;
}

/// Durable storage for accounts and their expenses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// All accounts belonging to a user.
    async fn fetch_accounts(&self, user_id: UserId) -> Result<Vec<Account>, StoreError>;

    /// All expenses across a user's accounts.
    async fn fetch_expenses(&self, user_id: UserId) -> Result<Vec<Expense>, StoreError>;
}

/// Durable storage for financing investors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvestorStore: Send + Sync {
    /// All investors financing a user's accounts.
    async fn fetch_investors(&self, user_id: UserId) -> Result<Vec<Investor>, StoreError>;
}
