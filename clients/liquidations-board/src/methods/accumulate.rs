use soroban_sdk::Vec;

use crate::types::liquidation::Liquidation;

use super::pagination::INITIAL_PAGE;

/// Merges liquidations found on `page` into the running list.
/// The first page starts the list over.
pub fn accumulate(liquidations: &mut Vec<Liquidation>, found: Vec<Liquidation>, page: u32) {
    if page == INITIAL_PAGE {
        *liquidations = found;
    } else {
        liquidations.append(&found);
    }
}
