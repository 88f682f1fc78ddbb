use common::FixedI128;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PositionValues {
    pub deposited_value_usd: FixedI128,
    pub borrowed_value_usd: FixedI128,
}
