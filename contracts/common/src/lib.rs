#![deny(warnings)]
#![no_std]

mod fixedi128;

pub use fixedi128::*;

/// Number of users returned by a single `list_user_info` page
pub const PAGE_SIZE: u32 = 100;

/// Decimals of the native asset (formatted the same way as ether amounts)
pub const NATIVE_DECIMALS: u32 = 18;

/// Decimals of the stable asset
pub const STABLE_DECIMALS: u32 = 6;

/// Multiplier turning a ratio into a percentage
pub const PERCENT_SCALE: i128 = 100;

/// Number of pages needed to list `members` users, rounded up
pub fn page_count(members: u32) -> u32 {
    members.div_ceil(PAGE_SIZE)
}
