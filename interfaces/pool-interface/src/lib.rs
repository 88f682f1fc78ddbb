#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Env, Vec};
use types::error::Error;
use types::user_info::UserInfo;

pub mod types;

pub struct Spec;

/// Read surface of the lending pool consumed by dashboards
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LendingPoolClient")]
pub trait LendingPoolTrait {
    /// Returns the `page`-th slice of pool members, `common::PAGE_SIZE` records per page.
    /// Pages past the last member are empty.
    fn list_user_info(env: Env, page: u32) -> Result<Vec<UserInfo>, Error>;

    /// Risk factor percentage above which a position can be liquidated
    fn get_liquidation_threshold(env: Env) -> Result<u32, Error>;

    /// Total number of pool members
    fn get_member_number(env: Env) -> Result<u32, Error>;
}
