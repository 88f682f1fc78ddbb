#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NetworkMismatch = 1,
    NoSelection = 2,

    MathOverflowError = 400,
}
