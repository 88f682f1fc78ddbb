use soroban_sdk::{Address, BytesN, Env};

/// Connected account and the network the wallet currently points to
#[derive(Clone, Debug, Default)]
pub struct Wallet {
    pub address: Option<Address>,
    pub network_id: Option<BytesN<32>>,
}

impl Wallet {
    pub fn new(address: Address, network_id: BytesN<32>) -> Self {
        Self {
            address: Some(address),
            network_id: Some(network_id),
        }
    }

    /// Wallet connected to the network of the ledger `env` is attached to
    pub fn from_ledger(env: &Env, address: Address) -> Self {
        Self::new(address, env.ledger().network_id())
    }

    pub fn is_on_network(&self, network_id: &BytesN<32>) -> bool {
        self.network_id.as_ref() == Some(network_id)
    }
}
