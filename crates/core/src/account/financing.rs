//! Financing resolution for profit splitting.
//!
//! Historical sales may reference accounts or investors that have since been
//! deleted; resolution degrades to self-funded instead of failing so that
//! old records keep reporting (referential-inconsistency rule).

use rust_decimal::Decimal;
use tracing::warn;
use qist_shared::types::AccountId;

use super::types::{Account, AccountKind, Investor};

/// How a sale is financed, for the two-party profit split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Financing {
    /// Financed from the merchant's own capital (main or custom account).
    SelfFunded,
    /// Financed by a single investor taking `percent` of profit.
    InvestorFunded {
        /// Investor's share of the profit margin, 0-100.
        percent: Decimal,
    },
    /// Financed from a shared partnership account. Excluded from the
    /// two-party split; partner economics use the net-capital strategy.
    Shared,
}

impl Financing {
    /// Resolves the financing of a sale from its account and the investor
    /// roster.
    ///
    /// A dangling account reference, or an investor-account whose owner no
    /// longer exists, resolves to [`Financing::SelfFunded`].
    #[must_use]
    pub fn resolve(
        account_id: AccountId,
        accounts: &[Account],
        investors: &[Investor],
    ) -> Self {
        let Some(account) = accounts.iter().find(|a| a.id == account_id) else {
            warn!(%account_id, "sale references a missing account; treating as self-funded");
            return Self::SelfFunded;
        };

        match &account.kind {
            AccountKind::Main | AccountKind::Custom => Self::SelfFunded,
            AccountKind::Shared { .. } => Self::Shared,
            AccountKind::Investor { owner } => {
                match investors.iter().find(|i| i.id == *owner) {
                    Some(investor) => Self::InvestorFunded {
                        percent: investor.profit_percentage,
                    },
                    None => {
                        warn!(
                            %account_id,
                            investor_id = %owner,
                            "investor account references a missing investor; treating as self-funded"
                        );
                        Self::SelfFunded
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use qist_shared::types::{InvestorId, UserId};

    fn account(kind: AccountKind) -> Account {
        Account {
            id: AccountId::new(),
            user_id: UserId::new(),
            name: "test".into(),
            kind,
        }
    }

    fn investor(id: InvestorId, percent: Decimal) -> Investor {
        Investor {
            id,
            name: "partner".into(),
            initial_amount: dec!(10000),
            profit_percentage: percent,
        }
    }

    #[test]
    fn test_main_account_is_self_funded() {
        let acc = account(AccountKind::Main);
        let resolved = Financing::resolve(acc.id, &[acc.clone()], &[]);
        assert_eq!(resolved, Financing::SelfFunded);
    }

    #[test]
    fn test_investor_account_resolves_percentage() {
        let inv_id = InvestorId::new();
        let acc = account(AccountKind::Investor { owner: inv_id });
        let resolved =
            Financing::resolve(acc.id, &[acc.clone()], &[investor(inv_id, dec!(30))]);
        assert_eq!(resolved, Financing::InvestorFunded { percent: dec!(30) });
    }

    #[test]
    fn test_missing_account_degrades_to_self_funded() {
        let resolved = Financing::resolve(AccountId::new(), &[], &[]);
        assert_eq!(resolved, Financing::SelfFunded);
    }

    #[test]
    fn test_missing_investor_degrades_to_self_funded() {
        let acc = account(AccountKind::Investor {
            owner: InvestorId::new(),
        });
        let resolved = Financing::resolve(acc.id, &[acc.clone()], &[]);
        assert_eq!(resolved, Financing::SelfFunded);
    }

    #[test]
    fn test_shared_account_is_shared() {
        let acc = account(AccountKind::Shared {
            partners: vec![InvestorId::new()],
        });
        let resolved = Financing::resolve(acc.id, &[acc.clone()], &[]);
        assert_eq!(resolved, Financing::Shared);
    }
}
