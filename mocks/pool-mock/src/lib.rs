#![deny(warnings)]
#![no_std]

use common::PAGE_SIZE;
use pool_interface::types::error::Error;
use pool_interface::types::user_info::UserInfo;
use pool_interface::LendingPoolTrait;
use soroban_sdk::{contract, contractclient, contractimpl, Address, Env, Vec};

use crate::storage::*;

mod storage;
#[cfg(test)]
mod test;

#[contractclient(name = "PoolMockAdminClient")]
pub trait PoolMockAdminTrait {
    fn set_user_info(env: Env, info: UserInfo) -> Result<(), Error>;

    fn remove_user(env: Env, who: Address) -> Result<(), Error>;

    fn set_liquidation_threshold(env: Env, value: u32);

    fn set_pause(env: Env, value: bool);
}

#[contract]
pub struct PoolMock;

#[contractimpl]
impl LendingPoolTrait for PoolMock {
    fn list_user_info(env: Env, page: u32) -> Result<Vec<UserInfo>, Error> {
        require_not_paused(&env)?;

        let members = read_members(&env);
        let mut users = Vec::new(&env);

        let start = match page.checked_mul(PAGE_SIZE) {
            Some(start) if start < members.len() => start,
            _ => return Ok(users),
        };
        let end = start.saturating_add(PAGE_SIZE).min(members.len());

        for i in start..end {
            let who = members.get_unchecked(i);
            users.push_back(read_user_info(&env, &who)?);
        }

        Ok(users)
    }

    fn get_liquidation_threshold(env: Env) -> Result<u32, Error> {
        require_not_paused(&env)?;
        read_liquidation_threshold(&env)
    }

    fn get_member_number(env: Env) -> Result<u32, Error> {
        require_not_paused(&env)?;
        Ok(read_members(&env).len())
    }
}

#[contractimpl]
impl PoolMockAdminTrait for PoolMock {
    fn set_user_info(env: Env, info: UserInfo) -> Result<(), Error> {
        if info.has_negative_amount() {
            return Err(Error::MustBeNonNegative);
        }

        let who = info.account_address.clone();
        if !has_user_info(&env, &who) {
            let mut members = read_members(&env);
            members.push_back(who.clone());
            write_members(&env, &members);
        }

        write_user_info(&env, &who, &info);

        Ok(())
    }

    fn remove_user(env: Env, who: Address) -> Result<(), Error> {
        if !has_user_info(&env, &who) {
            return Err(Error::UserNotExist);
        }

        let mut members = read_members(&env);
        if let Some(index) = members.first_index_of(&who) {
            members.remove(index);
        }
        write_members(&env, &members);
        remove_user_info(&env, &who);

        Ok(())
    }

    fn set_liquidation_threshold(env: Env, value: u32) {
        write_liquidation_threshold(&env, value);
    }

    fn set_pause(env: Env, value: bool) {
        write_pause(&env, value);
    }
}

fn require_not_paused(env: &Env) -> Result<(), Error> {
    if paused(env) {
        return Err(Error::Paused);
    }

    Ok(())
}
