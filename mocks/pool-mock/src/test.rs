#![cfg(test)]
extern crate std;

use crate::*;
use pool_interface::LendingPoolClient;
use soroban_sdk::testutils::Address as _;

fn create_pool<'a>(env: &Env) -> (LendingPoolClient<'a>, PoolMockAdminClient<'a>) {
    let address = env.register_contract(None, PoolMock);

    (
        LendingPoolClient::new(env, &address),
        PoolMockAdminClient::new(env, &address),
    )
}

fn user(env: &Env, native_deposit_amount: i128) -> UserInfo {
    UserInfo {
        native_deposit_amount,
        ..UserInfo::empty(Address::generate(env))
    }
}

#[test]
fn should_list_members_by_pages() {
    let env = Env::default();
    env.budget().reset_unlimited();
    let (pool, admin) = create_pool(&env);

    let users: std::vec::Vec<UserInfo> = (0..150).map(|i| user(&env, i)).collect();
    for info in users.iter() {
        admin.set_user_info(info);
    }

    let first = pool.list_user_info(&0);
    let second = pool.list_user_info(&1);
    let third = pool.list_user_info(&2);

    assert_eq!(pool.get_member_number(), 150);
    assert_eq!(first.len(), PAGE_SIZE);
    assert_eq!(second.len(), 50);
    assert_eq!(third.len(), 0);
    assert_eq!(first.get_unchecked(0), users[0]);
    assert_eq!(second.get_unchecked(0), users[100]);
    assert_eq!(second.get_unchecked(49), users[149]);
}

#[test]
fn should_return_empty_page_for_huge_index() {
    let env = Env::default();
    let (pool, admin) = create_pool(&env);
    admin.set_user_info(&user(&env, 1));

    assert!(pool.list_user_info(&u32::MAX).is_empty());
}

#[test]
fn should_overwrite_existing_member() {
    let env = Env::default();
    let (pool, admin) = create_pool(&env);

    let info = user(&env, 1);
    admin.set_user_info(&info);
    admin.set_user_info(&UserInfo {
        native_borrow_amount: 5,
        ..info.clone()
    });

    let page = pool.list_user_info(&0);
    assert_eq!(pool.get_member_number(), 1);
    assert_eq!(page.get_unchecked(0).native_borrow_amount, 5);
}

#[test]
fn should_remove_member() {
    let env = Env::default();
    let (pool, admin) = create_pool(&env);

    let first = user(&env, 1);
    let second = user(&env, 2);
    admin.set_user_info(&first);
    admin.set_user_info(&second);

    admin.remove_user(&first.account_address);

    let page = pool.list_user_info(&0);
    assert_eq!(pool.get_member_number(), 1);
    assert_eq!(page.get_unchecked(0), second);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #200)")]
fn should_fail_when_removing_unknown_member() {
    let env = Env::default();
    let (_, admin) = create_pool(&env);

    admin.remove_user(&Address::generate(&env));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #405)")]
fn should_fail_when_amount_is_negative() {
    let env = Env::default();
    let (_, admin) = create_pool(&env);

    admin.set_user_info(&user(&env, -1));
}

#[test]
fn should_fail_when_threshold_not_set() {
    let env = Env::default();
    let (pool, admin) = create_pool(&env);

    assert_eq!(
        pool.try_get_liquidation_threshold(),
        Err(Ok(Error::Uninitialized))
    );

    admin.set_liquidation_threshold(&80);
    assert_eq!(pool.get_liquidation_threshold(), 80);
}

#[test]
fn should_fail_reads_when_paused() {
    let env = Env::default();
    let (pool, admin) = create_pool(&env);
    admin.set_liquidation_threshold(&80);
    admin.set_pause(&true);

    assert_eq!(pool.try_list_user_info(&0), Err(Ok(Error::Paused)));
    assert_eq!(pool.try_get_member_number(), Err(Ok(Error::Paused)));
    assert_eq!(pool.try_get_liquidation_threshold(), Err(Ok(Error::Paused)));

    admin.set_pause(&false);
    assert_eq!(pool.get_member_number(), 0);
}
