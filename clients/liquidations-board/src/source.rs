use pool_interface::types::user_info::UserInfo;
use pool_interface::LendingPoolClient;
use soroban_sdk::Vec;

use crate::types::read_error::ReadError;

/// Reads the board depends on
pub trait PoolSource {
    fn list_user_info(&self, page: u32) -> Result<Vec<UserInfo>, ReadError>;

    fn liquidation_threshold(&self) -> Result<u32, ReadError>;

    fn member_number(&self) -> Result<u32, ReadError>;
}

impl PoolSource for LendingPoolClient<'_> {
    fn list_user_info(&self, page: u32) -> Result<Vec<UserInfo>, ReadError> {
        match self.try_list_user_info(&page) {
            Ok(Ok(users)) => Ok(users),
            Err(Ok(err)) => Err(ReadError::Pool(err)),
            _ => Err(ReadError::Host),
        }
    }

    fn liquidation_threshold(&self) -> Result<u32, ReadError> {
        match self.try_get_liquidation_threshold() {
            Ok(Ok(threshold)) => Ok(threshold),
            Err(Ok(err)) => Err(ReadError::Pool(err)),
            _ => Err(ReadError::Host),
        }
    }

    fn member_number(&self) -> Result<u32, ReadError> {
        match self.try_get_member_number() {
            Ok(Ok(number)) => Ok(number),
            Err(Ok(err)) => Err(ReadError::Pool(err)),
            _ => Err(ReadError::Host),
        }
    }
}
