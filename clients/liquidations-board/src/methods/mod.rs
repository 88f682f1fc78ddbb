pub mod accumulate;
pub mod eligibility;
pub mod pagination;
pub mod view;
