use common::page_count;

pub const INITIAL_PAGE: u32 = 0;

/// Whether a successful fetch of `current_page` should move the cursor forward.
/// One page past the last full page is fetched before the cursor stops.
pub fn should_advance(member_number: u32, current_page: u32) -> bool {
    page_count(member_number) > current_page
}
