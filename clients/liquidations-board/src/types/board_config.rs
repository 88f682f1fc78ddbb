use common::{NATIVE_DECIMALS, STABLE_DECIMALS};
use soroban_sdk::{contracttype, BytesN};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BoardConfig {
    /// Network the wallet must be on before a liquidation can be started
    pub required_network_id: BytesN<32>,
    pub native_decimals: u32,
    pub stable_decimals: u32,
}

impl BoardConfig {
    pub fn new(required_network_id: BytesN<32>) -> Self {
        Self {
            required_network_id,
            native_decimals: NATIVE_DECIMALS,
            stable_decimals: STABLE_DECIMALS,
        }
    }
}
