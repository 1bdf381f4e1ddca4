//! Small numeric helpers: means, least-squares slope and stable extrema.

/// Arithmetic mean, `None` for an empty input.
pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Ordinary least-squares slope of `y` against `x` for a first-degree fit.
///
/// Returns exactly `0.0` when fewer than two distinct `x` values are present.
pub(crate) fn linear_slope(points: &[(f64, f64)]) -> f64 {
    let (Some(x_mean), Some(y_mean)) = (
        mean(points.iter().map(|p| p.0)),
        mean(points.iter().map(|p| p.1)),
    ) else {
        return 0.0;
    };

    let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), &(x, y)| {
        let dx = x - x_mean;
        (sxy + dx * (y - y_mean), sxx + dx * dx)
    });

    if sxx == 0.0 {
        0.0
    } else {
        sxy / sxx
    }
}

/// Key of the first item holding the largest value. Items are visited in order, so ties
/// resolve to the earliest one.
pub(crate) fn first_max_by<T, K: Copy>(
    items: &[T],
    key: impl Fn(&T) -> K,
    value: impl Fn(&T) -> f64,
) -> Option<K> {
    let mut best: Option<(K, f64)> = None;
    for item in items {
        let v = value(item);
        match best {
            Some((_, current)) if v <= current => {}
            _ => best = Some((key(item), v)),
        }
    }
    best.map(|(k, _)| k)
}

/// Key of the first item holding the smallest value.
pub(crate) fn first_min_by<T, K: Copy>(
    items: &[T],
    key: impl Fn(&T) -> K,
    value: impl Fn(&T) -> f64,
) -> Option<K> {
    first_max_by(items, key, |item| -value(item))
}
