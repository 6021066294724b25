//! Bounded-sum calculator.

/// Largest value still counted by [`sum_ignoring_over_limit`].
pub const SUM_CEILING: i32 = 1000;

/// Sums the given numbers, skipping absent entries and values above
/// [`SUM_CEILING`].
///
/// Accepts plain `i32` values as well as `Option<i32>`. An absent list is an
/// empty iterator and sums to 0. The result is widened to `i64`.
pub fn sum_ignoring_over_limit<I>(numbers: I) -> i64
where
    I: IntoIterator,
    I::Item: Into<Option<i32>>,
{
    numbers
        .into_iter()
        .filter_map(Into::<Option<i32>>::into)
        .filter(|value| *value <= SUM_CEILING)
        .map(i64::from)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::sum_ignoring_over_limit;

    #[test]
    fn ceiling_value_itself_is_counted() {
        assert_eq!(sum_ignoring_over_limit([1000, 1001]), 1000);
    }

    #[test]
    fn accumulator_does_not_overflow_i32() {
        let values = vec![1000; 3_000_000];
        assert_eq!(sum_ignoring_over_limit(values), 3_000_000_000);
    }
}
