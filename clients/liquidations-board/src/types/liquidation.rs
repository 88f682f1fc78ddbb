use common::FixedI128;
use pool_interface::types::user_info::UserInfo;
use soroban_sdk::{contracttype, Address};

/// Member position whose risk factor is above the liquidation threshold
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Liquidation {
    pub user_info: UserInfo,
    /// Borrowed value as a percentage of deposited value, inner value of `FixedI128`
    pub risk_factor: i128,
}

impl Liquidation {
    pub fn new(user_info: UserInfo, risk_factor: FixedI128) -> Self {
        Self {
            user_info,
            risk_factor: risk_factor.into_inner(),
        }
    }

    pub fn risk_factor_percent(&self) -> FixedI128 {
        FixedI128::from_inner(self.risk_factor)
    }
}

/// Table row of the board. Values are inner values of `FixedI128`,
/// USD values are `None` when they overflow at the current prices.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LiquidationRow {
    pub account_address: Address,
    pub borrowed_value_usd: Option<i128>,
    pub deposited_value_usd: Option<i128>,
    pub risk_factor: i128,
}
