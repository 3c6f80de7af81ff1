//! Splitting a value by ratios without losing or creating minor units.
//!
//! Each share is first computed as `amount * ratio / total` and truncated to
//! the minimum unit. The truncation loss is then handed out one unit at a
//! time, in index order and cycling if needed, to the shares with a non-zero
//! ratio. Earlier indices therefore absorb the remainder: splitting 100.00
//! three ways gives `[33.34, 33.33, 33.33]`. This tie-break is arbitrary and
//! kept stable.
//!
//! When `amount * ratio` or the ratio total does not fit in a `Decimal`, the
//! ratios are reduced first, so the shares can be off by a few units before
//! the remainder pass. The result still sums exactly to the amount.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::coerce::ToDecimal;
use super::error::{MoneyError, MoneyResult};
use super::types::Money;

impl Money {
    /// Splits the value in proportion to `ratios`.
    ///
    /// The result has one entry per ratio, in the same order and currency,
    /// and sums exactly to `self`. A zero ratio yields a zero share.
    ///
    /// The minimum unit is the currency's (`0.01` for USD) unless the amount
    /// itself carries more decimal places, in which case that finer unit is
    /// used so the total is still conserved.
    ///
    /// # Errors
    ///
    /// `InvalidOperation` if `ratios` is empty, sums to zero or contains a
    /// negative entry; `InvalidAmount` if a ratio cannot be read as a decimal.
    ///
    /// # Example
    ///
    /// ```
    /// use moneta_core::Money;
    ///
    /// let shares = Money::new(100, "USD").unwrap().allocate([1, 1, 1]).unwrap();
    /// let shares: Vec<String> = shares.iter().map(ToString::to_string).collect();
    /// assert_eq!(shares, ["USD 33.34", "USD 33.33", "USD 33.33"]);
    /// ```
    pub fn allocate<I>(&self, ratios: I) -> MoneyResult<Vec<Self>>
    where
        I: IntoIterator,
        I::Item: ToDecimal,
    {
        let ratios = ratios
            .into_iter()
            .map(ToDecimal::to_decimal)
            .collect::<MoneyResult<Vec<_>>>()?;

        if ratios.iter().any(Decimal::is_sign_negative) {
            return Err(MoneyError::invalid_operation("negative allocation ratio"));
        }
        let (ratios, total) = normalized(ratios)?;
        if total.is_zero() {
            return Err(MoneyError::invalid_operation(
                "allocation ratios sum to zero",
            ));
        }
        if ratios.len() == 1 {
            return Ok(vec![self.clone()]);
        }

        let places = self.currency().decimal_places().max(self.amount.scale());
        let unit = Decimal::new(1, places);

        let mut shares = ratios
            .iter()
            .map(|ratio| {
                share_of(self.amount, *ratio, total)
                    .map(|share| share.round_dp_with_strategy(places, RoundingStrategy::ToZero))
                    .ok_or_else(allocation_overflow)
            })
            .collect::<MoneyResult<Vec<_>>>()?;

        let remainder = shares
            .iter()
            .try_fold(Decimal::ZERO, |sum, share| sum.checked_add(*share))
            .and_then(|allocated| self.amount.checked_sub(allocated))
            .ok_or_else(allocation_overflow)?;
        debug!(
            currency = %self.code(),
            %remainder,
            %unit,
            shares = shares.len(),
            "Distributing allocation remainder"
        );

        // the remainder is a whole number of units; cycle until it is spent
        let recipients: Vec<usize> = ratios
            .iter()
            .enumerate()
            .filter(|(_, ratio)| !ratio.is_zero())
            .map(|(index, _)| index)
            .collect();
        let step = if remainder.is_sign_negative() { -unit } else { unit };
        let mut remaining = remainder;
        for &index in recipients.iter().cycle() {
            if remaining.is_zero() {
                break;
            }
            shares[index] += step;
            remaining -= step;
        }

        Ok(shares
            .into_iter()
            .map(|share| self.with_amount(share))
            .collect())
    }

    /// Splits the value into `parts` equal shares, earlier shares taking the
    /// remainder.
    ///
    /// # Errors
    ///
    /// `InvalidOperation` if `parts` is zero.
    pub fn allocate_equal(&self, parts: usize) -> MoneyResult<Vec<Self>> {
        self.allocate(std::iter::repeat_n(Decimal::ONE, parts))
    }
}

fn allocation_overflow() -> MoneyError {
    MoneyError::invalid_operation("allocation overflow")
}

fn sum(ratios: &[Decimal]) -> Option<Decimal> {
    ratios
        .iter()
        .try_fold(Decimal::ZERO, |total, ratio| total.checked_add(*ratio))
}

/// Ratios and their total. Ratios whose total does not fit are rescaled by
/// the largest one first.
fn normalized(ratios: Vec<Decimal>) -> MoneyResult<(Vec<Decimal>, Decimal)> {
    if let Some(total) = sum(&ratios) {
        return Ok((ratios, total));
    }

    let largest = ratios.iter().copied().max().unwrap_or(Decimal::ZERO);
    let scaled = ratios
        .iter()
        .map(|ratio| ratio.checked_div(largest))
        .collect::<Option<Vec<_>>>();
    scaled
        .and_then(|scaled| sum(&scaled).map(|total| (scaled, total)))
        .ok_or_else(|| MoneyError::invalid_operation("allocation ratios overflow"))
}

/// `amount * ratio / total`, dividing first when the product does not fit.
fn share_of(amount: Decimal, ratio: Decimal, total: Decimal) -> Option<Decimal> {
    amount
        .checked_mul(ratio)
        .and_then(|scaled| scaled.checked_div(total))
        .or_else(|| {
            ratio
                .checked_div(total)
                .and_then(|fraction| amount.checked_mul(fraction))
        })
}
