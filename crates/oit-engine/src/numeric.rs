// ABOUTME: Decimal arithmetic helpers used by search, mutators, and validation
// ABOUTME: Division and multiplication degrade to sentinel values instead of panicking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use rust_decimal::Decimal;

/// `numerator / denominator`, or zero when the denominator is zero
#[must_use]
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

/// `a * b`, saturating toward the sign of the true product
#[must_use]
pub fn mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        if a.is_sign_negative() == b.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// `a + b`, saturating toward the sign of the overflow
#[must_use]
pub fn add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b)
        .unwrap_or(if b.is_sign_negative() { Decimal::MIN } else { Decimal::MAX })
}

/// `a - b`, saturating toward the sign of the overflow
#[must_use]
pub fn sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b)
        .unwrap_or(if b.is_sign_negative() { Decimal::MAX } else { Decimal::MIN })
}

/// Relative error of `actual` against `expected`
///
/// A zero `expected` is measured against 1 so the result stays finite.
#[must_use]
pub fn relative_error(actual: Decimal, expected: Decimal) -> Decimal {
    let denominator = if expected.is_zero() {
        Decimal::ONE
    } else {
        expected.abs()
    };
    actual
        .checked_sub(expected)
        .map(|difference| difference.abs())
        .and_then(|difference| difference.checked_div(denominator))
        .unwrap_or(Decimal::MAX)
}

/// Protein (mg) a mixture delivers per daily amount
///
/// `total_volume` of zero is treated as 1 so a broken recipe still yields a
/// number to compare against its target.
#[must_use]
pub fn delivered_protein(
    mix_protein_mg: Decimal,
    daily_amount: Decimal,
    total_volume: Decimal,
) -> Decimal {
    let volume = if total_volume.is_zero() {
        Decimal::ONE
    } else {
        total_volume
    };
    mul(mix_protein_mg, daily_amount)
        .checked_div(volume)
        .unwrap_or(Decimal::MAX)
}
