#![cfg(test)]
extern crate std;

use crate::*;
use pool_interface::LendingPoolClient;
use pool_mock::{PoolMock, PoolMockAdminClient};
use soroban_sdk::testutils::{Address as _, Ledger, LedgerInfo};
use soroban_sdk::{Address, BytesN};

pub const NETWORK_ID: [u8; 32] = [7; 32];
pub const OTHER_NETWORK_ID: [u8; 32] = [9; 32];

pub const NATIVE_UNIT: i128 = 1_000_000_000_000_000_000;
pub const STABLE_UNIT: i128 = 1_000_000;

pub(crate) struct Sut<'a> {
    pub pool: LendingPoolClient<'a>,
    pub pool_admin: PoolMockAdminClient<'a>,
    pub account: Address,
}

pub(crate) fn init_pool<'a>(env: &Env) -> Sut<'a> {
    env.budget().reset_unlimited();

    let ledger_info = env.ledger().get();
    env.ledger().set(LedgerInfo {
        network_id: NETWORK_ID,
        ..ledger_info
    });

    let address = env.register_contract(None, PoolMock);

    Sut {
        pool: LendingPoolClient::new(env, &address),
        pool_admin: PoolMockAdminClient::new(env, &address),
        account: Address::generate(env),
    }
}

pub(crate) fn init_board<'a>(env: &Env, sut: &Sut<'a>) -> Board<LendingPoolClient<'a>> {
    Board::new(
        env,
        LendingPoolClient::new(env, &sut.pool.address),
        Wallet::from_ledger(env, sut.account.clone()),
        board_config(env),
        default_props(),
    )
}

pub(crate) fn board_config(env: &Env) -> BoardConfig {
    BoardConfig::new(BytesN::from_array(env, &NETWORK_ID))
}

/// Native asset at 1000 USD, stable asset at 1 USD
pub(crate) fn default_props() -> BoardProps {
    BoardProps::new(FixedI128::from_int(1000).unwrap(), FixedI128::ONE)
}

/// 1 native deposited, 0.9 native borrowed: 90% risk factor at default prices
pub(crate) fn risky_position(account: &Address) -> UserInfo {
    UserInfo {
        native_deposit_amount: NATIVE_UNIT,
        native_borrow_amount: NATIVE_UNIT * 9 / 10,
        ..UserInfo::empty(account.clone())
    }
}

/// 1 native deposited, 0.5 native borrowed: 50% risk factor at default prices
pub(crate) fn healthy_position(account: &Address) -> UserInfo {
    UserInfo {
        native_deposit_amount: NATIVE_UNIT,
        native_borrow_amount: NATIVE_UNIT / 2,
        ..UserInfo::empty(account.clone())
    }
}

/// Adds `members` positions to the pool. The connected account takes the
/// `account_index` slot with a risky position, the rest are strangers.
pub(crate) fn fill_pool(env: &Env, sut: &Sut, members: u32, account_index: Option<u32>) {
    for i in 0..members {
        let info = if Some(i) == account_index {
            risky_position(&sut.account)
        } else {
            risky_position(&Address::generate(env))
        };

        sut.pool_admin.set_user_info(&info);
    }
}

pub(crate) mod fixed {
    use common::FixedI128;

    pub fn int(value: i128) -> FixedI128 {
        FixedI128::from_int(value).unwrap()
    }

    pub fn rational(nom: i128, denom: i128) -> FixedI128 {
        FixedI128::from_rational(nom, denom).unwrap()
    }
}
