use soroban_fixed_point_math::FixedPoint;

/// Fixed type with inner type of i128 and fixed denominator 10e9
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct FixedI128(i128);

impl FixedI128 {
    pub const DENOMINATOR: i128 = 1_000_000_000;
    pub const ZERO: FixedI128 = FixedI128(0);
    pub const ONE: FixedI128 = FixedI128(Self::DENOMINATOR);

    /// Returns inner value
    pub const fn into_inner(self) -> i128 {
        self.0
    }

    /// Construct FixedI128 from inner value
    pub fn from_inner<T: Into<i128>>(inner: T) -> FixedI128 {
        FixedI128(inner.into())
    }

    /// Construct fixed value from rational
    pub fn from_rational<N: Into<i128>, D: Into<i128>>(nom: N, denom: D) -> Option<FixedI128> {
        Self::DENOMINATOR
            .checked_mul(nom.into())?
            .checked_div(denom.into())
            .map(FixedI128)
    }

    /// Construct fixed from int value
    pub fn from_int<T: Into<i128>>(value: T) -> Option<FixedI128> {
        FixedI128::DENOMINATOR
            .checked_mul(value.into())
            .map(FixedI128)
    }

    /// Value of `amount`, given in the smallest units of a token with `decimals`,
    /// at price `self`. The amount is scaled once after pricing, so digits below
    /// one unit of fixed precision are floored only in the result.
    pub fn mul_units<T: Into<i128>>(self, amount: T, decimals: u32) -> Option<FixedI128> {
        let amount = amount.into();
        let unit = 10i128.checked_pow(decimals)?;

        if let Some(value) = amount.fixed_mul_floor(self.0, unit) {
            return Some(FixedI128(value));
        }

        // amount * price does not fit, price the amount truncated to fixed precision
        let amount = if decimals <= 9 {
            Self::from_rational(amount, unit)?
        } else {
            FixedI128(amount.checked_div(10i128.checked_pow(decimals - 9)?)?)
        };
        amount.checked_mul(self)
    }

    /// Multiplication of two fixed values
    pub fn checked_mul(self, value: FixedI128) -> Option<FixedI128> {
        self.0
            .fixed_mul_floor(value.0, Self::DENOMINATOR)
            .map(FixedI128)
    }

    /// Division of two FixedI128 values
    pub fn checked_div(self, value: FixedI128) -> Option<FixedI128> {
        self.0
            .fixed_div_floor(value.0, Self::DENOMINATOR)
            .map(FixedI128)
    }

    /// Sum of two fixed values
    pub fn checked_add(self, value: FixedI128) -> Option<FixedI128> {
        self.0.checked_add(value.0).map(FixedI128)
    }

    /// Multiply inner value of fixed
    pub fn mul_inner<T: Into<i128>>(self, value: T) -> Option<FixedI128> {
        self.0.checked_mul(value.into()).map(FixedI128)
    }

    /// Returns true if self is positive, false - when negative or zero
    pub fn is_positive(self) -> bool {
        self.0.is_positive()
    }
}
