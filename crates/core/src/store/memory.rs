//! In-memory store backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use qist_shared::types::{SaleId, UserId};

use crate::account::{Account, Expense, Investor};
use crate::sale::Sale;

use super::error::StoreError;
use super::traits::{AccountStore, InvestorStore, SaleStore};

/// Hash-map backed store, for tests and single-process deployments.
#[derive(Default)]
pub struct MemoryStore {
    sales: RwLock<HashMap<SaleId, Sale>>,
    accounts: RwLock<HashMap<UserId, Vec<Account>>>,
    expenses: RwLock<HashMap<UserId, Vec<Expense>>>,
    investors: RwLock<HashMap<UserId, Vec<Investor>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the accounts returned for a user.
    pub async fn put_accounts(&self, user_id: UserId, accounts: Vec<Account>) {
        self.accounts.write().await.insert(user_id, accounts);
    }

    /// Seeds the expenses returned for a user.
    pub async fn put_expenses(&self, user_id: UserId, expenses: Vec<Expense>) {
        self.expenses.write().await.insert(user_id, expenses);
    }

    /// Seeds the investors returned for a user.
    pub async fn put_investors(&self, user_id: UserId, investors: Vec<Investor>) {
        self.investors.write().await.insert(user_id, investors);
    }
}

#[async_trait]
impl SaleStore for MemoryStore {
    async fn fetch_sales(&self, user_id: UserId) -> Result<Vec<Sale>, StoreError> {
        let sales = self.sales.read().await;
        let mut owned: Vec<Sale> = sales
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|s| (s.sale_date, s.id.into_inner()));
        Ok(owned)
    }

    async fn load_sale(&self, sale_id: SaleId) -> Result<Sale, StoreError> {
        self.sales
            .read()
            .await
            .get(&sale_id)
            .cloned()
            .ok_or(StoreError::SaleNotFound(sale_id))
    }

    async fn save_sale(&self, sale: &Sale) -> Result<(), StoreError> {
        self.sales.write().await.insert(sale.id, sale.clone());
        Ok(())
    }

    async fn delete_sale(&self, sale_id: SaleId) -> Result<(), StoreError> {
        self.sales
            .write()
            .await
            .remove(&sale_id)
            .map(|_| ())
            .ok_or(StoreError::SaleNotFound(sale_id))
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn fetch_accounts(&self, user_id: UserId) -> Result<Vec<Account>, StoreError> {
        Ok(self
            .accounts
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_expenses(&self, user_id: UserId) -> Result<Vec<Expense>, StoreError> {
        Ok(self
            .expenses
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl InvestorStore for MemoryStore {
    async fn fetch_investors(&self, user_id: UserId) -> Result<Vec<Investor>, StoreError> {
        Ok(self
            .investors
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}
