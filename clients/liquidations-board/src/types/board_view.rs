use common::FixedI128;
use soroban_sdk::Vec;

use crate::types::dialog_state::DialogState;
use crate::types::liquidation::LiquidationRow;

pub const BOARD_TITLE: &str = "Liquidations";

pub const BOARD_COLUMNS: [&str; 4] = [
    "Borrowed Value",
    "Deposited Value",
    "Risk Factor",
    "Operation",
];

#[derive(Clone, Debug)]
pub struct BoardView {
    pub title: &'static str,
    pub columns: [&'static str; 4],
    pub rows: Vec<LiquidationRow>,
    pub dialog: DialogState,
    pub native_price_usd: FixedI128,
    pub stable_price_usd: FixedI128,
}
