//! Transactional sale mutations over a store backend.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::instrument;
use qist_shared::types::{PaymentId, SaleId};

use crate::allocation::PaymentAllocator;
use crate::sale::Sale;

use super::error::ServiceError;
use super::traits::SaleStore;

/// Read-modify-write wrapper around a [`SaleStore`].
///
/// Every mutation loads the sale, applies the allocation rule to a clone,
/// and persists the result; callers only ever see the persisted record, so
/// a failed save leaves observable state untouched.
pub struct SaleService<S> {
    store: S,
}

impl<S: SaleStore> SaleService<S> {
    /// Wraps a store backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Records a real payment against a sale and persists the result.
    ///
    /// # Errors
    ///
    /// Store errors for a missing sale or failed save; allocation errors
    /// for a non-positive amount.
    #[instrument(skip(self), fields(%sale_id, %amount))]
    pub async fn record_payment(
        &self,
        sale_id: SaleId,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Sale, ServiceError> {
        let mut sale = self.store.load_sale(sale_id).await?;
        PaymentAllocator::record_payment(&mut sale, amount, date)?;
        self.store.save_sale(&sale).await?;
        Ok(sale)
    }

    /// Undoes a settled payment and persists the result.
    #[instrument(skip(self), fields(%sale_id, %payment_id))]
    pub async fn undo_payment(
        &self,
        sale_id: SaleId,
        payment_id: PaymentId,
    ) -> Result<Sale, ServiceError> {
        let mut sale = self.store.load_sale(sale_id).await?;
        PaymentAllocator::undo_payment(&mut sale, payment_id)?;
        self.store.save_sale(&sale).await?;
        Ok(sale)
    }

    /// Moves an unpaid slot to a new due date and persists the result.
    #[instrument(skip(self), fields(%sale_id, %payment_id))]
    pub async fn reschedule_payment(
        &self,
        sale_id: SaleId,
        payment_id: PaymentId,
        new_date: NaiveDate,
    ) -> Result<Sale, ServiceError> {
        let mut sale = self.store.load_sale(sale_id).await?;
        PaymentAllocator::reschedule_payment(&mut sale, payment_id, new_date)?;
        self.store.save_sale(&sale).await?;
        Ok(sale)
    }

    /// Marks an unpaid slot as settled by surplus and persists the result.
    #[instrument(skip(self), fields(%sale_id, %payment_id))]
    pub async fn settle_slot(
        &self,
        sale_id: SaleId,
        payment_id: PaymentId,
    ) -> Result<Sale, ServiceError> {
        let mut sale = self.store.load_sale(sale_id).await?;
        PaymentAllocator::settle_slot(&mut sale, payment_id)?;
        self.store.save_sale(&sale).await?;
        Ok(sale)
    }
}
