//! Token quantity helpers.
//!
//! Component quantities in set protocol are expressed in the component's
//! native units; index quantities use 18 decimals shifted by the index
//! natural unit. Scaling moves between the two.

use crate::error::{CommonError, Result};

/// Decimals used by contracts produced by the set factory.
pub const SET_PROTOCOL_DECIMALS: i32 = 18;

/// Powers of ten that `f64` represents exactly.
const POWERS_OF_TEN: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// `10^exponent`.
///
/// # Errors
///
/// [`CommonError::PowerOfTenOverflow`] when `|exponent| > 22`.
pub fn power_of_ten(exponent: i32) -> Result<f64> {
    shift_decimals(1.0, exponent)
}

/// Multiplies `value` by `10^exponent`, dividing for negative exponents so the
/// result stays correctly rounded.
fn shift_decimals(value: f64, exponent: i32) -> Result<f64> {
    let power = POWERS_OF_TEN
        .get(exponent.unsigned_abs() as usize)
        .copied()
        .ok_or(CommonError::PowerOfTenOverflow { exponent })?;
    Ok(if exponent >= 0 {
        value * power
    } else {
        value / power
    })
}

/// Converts a quantity in component units to index units.
pub fn scale_component_quantity(
    unscaled_quantity: f64,
    component_decimals: u16,
    index_natural_unit: u16,
) -> Result<f64> {
    let exponent =
        SET_PROTOCOL_DECIMALS - i32::from(component_decimals) - i32::from(index_natural_unit);
    shift_decimals(unscaled_quantity, exponent)
}

/// Converts a quantity in index units back to component units.
pub fn descale_component_quantity(
    scaled_quantity: f64,
    component_decimals: u16,
    index_natural_unit: u16,
) -> Result<f64> {
    let exponent =
        i32::from(component_decimals) + i32::from(index_natural_unit) - SET_PROTOCOL_DECIMALS;
    shift_decimals(scaled_quantity, exponent)
}

/// Truncates `value` towards negative infinity after `precision` decimals.
pub fn floor_with_precision(value: f64, precision: i32) -> Result<f64> {
    let multiplier = power_of_ten(precision)?;
    Ok((value * multiplier).floor() / multiplier)
}
