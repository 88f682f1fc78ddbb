use pool_interface::types::error::Error;
use pool_interface::types::user_info::UserInfo;
use soroban_sdk::{contracttype, vec, Address, Env, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS;
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Members,
    User(Address),
    LiquidationThreshold,
    Pause,
}

pub fn read_members(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Members)
        .unwrap_or(vec![env])
}

pub fn write_members(env: &Env, members: &Vec<Address>) {
    let key = DataKey::Members;

    env.storage().persistent().set(&key, members);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn has_user_info(env: &Env, who: &Address) -> bool {
    env.storage().persistent().has(&DataKey::User(who.clone()))
}

pub fn read_user_info(env: &Env, who: &Address) -> Result<UserInfo, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::User(who.clone()))
        .ok_or(Error::UserNotExist)
}

pub fn write_user_info(env: &Env, who: &Address, info: &UserInfo) {
    let key = DataKey::User(who.clone());

    env.storage().persistent().set(&key, info);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn remove_user_info(env: &Env, who: &Address) {
    env.storage().persistent().remove(&DataKey::User(who.clone()));
}

pub fn read_liquidation_threshold(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&DataKey::LiquidationThreshold)
        .ok_or(Error::Uninitialized)
}

pub fn write_liquidation_threshold(env: &Env, value: u32) {
    env.storage()
        .instance()
        .set(&DataKey::LiquidationThreshold, &value);
}

pub fn paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Pause)
        .unwrap_or(false)
}

pub fn write_pause(env: &Env, value: bool) {
    env.storage().instance().set(&DataKey::Pause, &value);
}
