use common::FixedI128;
use pool_interface::types::user_info::UserInfo;

/// Inputs supplied by the dashboard that hosts the board
#[derive(Clone, Debug)]
pub struct BoardProps {
    /// Position of the connected user, handed through to the liquidate dialog
    pub user_info: Option<UserInfo>,
    pub native_price_usd: FixedI128,
    pub stable_price_usd: FixedI128,
}

impl BoardProps {
    pub fn new(native_price_usd: FixedI128, stable_price_usd: FixedI128) -> Self {
        Self {
            user_info: None,
            native_price_usd,
            stable_price_usd,
        }
    }
}
