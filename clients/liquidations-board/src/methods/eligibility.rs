use common::{FixedI128, PERCENT_SCALE};
use pool_interface::types::user_info::UserInfo;
use soroban_sdk::{log, Address, Env, Vec};

use crate::types::board_config::BoardConfig;
use crate::types::board_props::BoardProps;
use crate::types::error::Error;
use crate::types::liquidation::Liquidation;
use crate::types::position_values::PositionValues;

/// Selects the connected account's positions whose risk factor is above `threshold`.
/// Positions whose values do not fit into `FixedI128` are skipped.
pub fn eligible_liquidations(
    env: &Env,
    users: &Vec<UserInfo>,
    who: Option<&Address>,
    threshold: u32,
    props: &BoardProps,
    config: &BoardConfig,
) -> Result<Vec<Liquidation>, Error> {
    let mut liquidations = Vec::new(env);

    let who = match who {
        Some(who) => who,
        None => return Ok(liquidations),
    };
    let threshold = FixedI128::from_int(threshold).ok_or(Error::MathOverflowError)?;

    for user_info in users.iter() {
        if user_info.account_address != *who || !user_info.has_borrow() {
            continue;
        }

        let risk_factor = match calc_position_values(&user_info, props, config)
            .and_then(|values| calc_risk_factor(&values))
        {
            Ok(Some(risk_factor)) => risk_factor,
            Ok(None) => continue,
            Err(err) => {
                log!(
                    env,
                    "skipping position",
                    user_info.account_address,
                    err as u32
                );
                continue;
            }
        };

        if risk_factor > threshold {
            liquidations.push_back(Liquidation::new(user_info, risk_factor));
        }
    }

    Ok(liquidations)
}

pub fn calc_position_values(
    user_info: &UserInfo,
    props: &BoardProps,
    config: &BoardConfig,
) -> Result<PositionValues, Error> {
    let native_value = |amount: i128| -> Result<FixedI128, Error> {
        props
            .native_price_usd
            .mul_units(amount, config.native_decimals)
            .ok_or(Error::MathOverflowError)
    };
    let stable_value = |amount: i128| -> Result<FixedI128, Error> {
        props
            .stable_price_usd
            .mul_units(amount, config.stable_decimals)
            .ok_or(Error::MathOverflowError)
    };
    let sum = |a: i128, b: i128| a.checked_add(b).ok_or(Error::MathOverflowError);

    let native_deposit = sum(
        user_info.native_deposit_amount,
        user_info.native_reward_amount,
    )?;
    // stable rewards are not part of the deposit, the stable deposit is counted twice
    let stable_deposit = sum(
        user_info.stable_deposit_amount,
        user_info.stable_deposit_amount,
    )?;
    let native_borrow = sum(
        user_info.native_borrow_amount,
        user_info.native_interest_amount,
    )?;
    let stable_borrow = sum(
        user_info.stable_borrow_amount,
        user_info.stable_interest_amount,
    )?;

    let deposited_value_usd = native_value(native_deposit)?
        .checked_add(stable_value(stable_deposit)?)
        .ok_or(Error::MathOverflowError)?;
    let borrowed_value_usd = native_value(native_borrow)?
        .checked_add(stable_value(stable_borrow)?)
        .ok_or(Error::MathOverflowError)?;

    Ok(PositionValues {
        deposited_value_usd,
        borrowed_value_usd,
    })
}

/// Borrowed value as a percentage of deposited value.
/// Returns `None` when nothing is deposited.
pub fn calc_risk_factor(values: &PositionValues) -> Result<Option<FixedI128>, Error> {
    if !values.deposited_value_usd.is_positive() {
        return Ok(None);
    }

    values
        .borrowed_value_usd
        .mul_inner(PERCENT_SCALE)
        .and_then(|borrowed| borrowed.checked_div(values.deposited_value_usd))
        .map(Some)
        .ok_or(Error::MathOverflowError)
}
