use soroban_sdk::{contracttype, Address};

/// Pool position of a single member. Amounts are in the smallest units
/// of the native and the stable asset respectively.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct UserInfo {
    pub account_address: Address,
    pub native_deposit_amount: i128,
    pub native_reward_amount: i128,
    pub native_borrow_amount: i128,
    pub native_interest_amount: i128,
    pub stable_deposit_amount: i128,
    pub stable_reward_amount: i128,
    pub stable_borrow_amount: i128,
    pub stable_interest_amount: i128,
}

impl UserInfo {
    /// Position with no balances
    pub fn empty(account_address: Address) -> Self {
        Self {
            account_address,
            native_deposit_amount: 0,
            native_reward_amount: 0,
            native_borrow_amount: 0,
            native_interest_amount: 0,
            stable_deposit_amount: 0,
            stable_reward_amount: 0,
            stable_borrow_amount: 0,
            stable_interest_amount: 0,
        }
    }

    pub fn has_borrow(&self) -> bool {
        self.native_borrow_amount != 0 || self.stable_borrow_amount != 0
    }

    pub fn has_negative_amount(&self) -> bool {
        [
            self.native_deposit_amount,
            self.native_reward_amount,
            self.native_borrow_amount,
            self.native_interest_amount,
            self.stable_deposit_amount,
            self.stable_reward_amount,
            self.stable_borrow_amount,
            self.stable_interest_amount,
        ]
        .iter()
        .any(|amount| amount.is_negative())
    }
}
