use soroban_sdk::{log, Env, Vec};

use crate::types::board_config::BoardConfig;
use crate::types::board_props::BoardProps;
use crate::types::liquidation::{Liquidation, LiquidationRow};

use super::eligibility::calc_position_values;

/// One table row per liquidation, valued at the current prices
pub fn rows(
    env: &Env,
    liquidations: &Vec<Liquidation>,
    props: &BoardProps,
    config: &BoardConfig,
) -> Vec<LiquidationRow> {
    let mut rows = Vec::new(env);

    for liquidation in liquidations.iter() {
        let values = calc_position_values(&liquidation.user_info, props, config)
            .map_err(|err| {
                log!(
                    env,
                    "row values unavailable",
                    liquidation.user_info.account_address,
                    err as u32
                );
            })
            .ok();

        rows.push_back(LiquidationRow {
            account_address: liquidation.user_info.account_address.clone(),
            borrowed_value_usd: values.map(|v| v.borrowed_value_usd.into_inner()),
            deposited_value_usd: values.map(|v| v.deposited_value_usd.into_inner()),
            risk_factor: liquidation.risk_factor,
        });
    }

    rows
}
