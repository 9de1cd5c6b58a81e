use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

/// Basic statistics over all values stored in a signal track.
#[derive(Clone, Copy, PartialEq, Debug, Default, Constructor, Dissolve, Getters)]
pub struct Summary {
    sum: f64,
    count: usize,
    mean: f64,
    /// Population standard deviation
    std: f64,
}

impl Summary {
    pub fn from_values(values: impl Iterator<Item = f64> + Clone) -> Self {
        let (sum, count) = values
            .clone()
            .fold((0.0, 0usize), |(sum, count), x| (sum + x, count + 1));
        if count == 0 {
            return Self::default();
        }

        let mean = sum / count as f64;
        let variance = values.map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;
        Self::new(sum, count, mean, variance.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let summary = Summary::from_values([1.0, 2.0, 3.0, 4.0].into_iter());
        assert_eq!(summary.sum(), &10.0);
        assert_eq!(summary.count(), &4);
        assert_eq!(summary.mean(), &2.5);
        assert!((summary.std() - 1.25f64.sqrt()).abs() < 1e-12);

        let empty = Summary::from_values(std::iter::empty());
        assert_eq!(empty, Summary::default());
    }
}
