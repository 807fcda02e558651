use serde::{Deserialize, Serialize};

/// Summary statistics for one series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Count, min, max, mean and median over the finite samples of `series`.
///
/// Returns `None` when no finite sample is present.
pub fn summarize(series: &[f64]) -> Option<Summary> {
    let mut vals: Vec<f64> = series.iter().copied().filter(|v| v.is_finite()).collect();
    if vals.is_empty() {
        return None;
    }
    vals.sort_by(f64::total_cmp);
    let count = vals.len();
    let mean = vals.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 1 {
        vals[count / 2]
    } else {
        (vals[count / 2 - 1] + vals[count / 2]) / 2.0
    };
    Some(Summary {
        count,
        min: vals[0],
        max: vals[count - 1],
        mean,
        median,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_and_even_medians() {
        let s = summarize(&[3.0, 1.0, 2.0]).unwrap();
        assert_eq!((s.count, s.min, s.max, s.median), (3, 1.0, 3.0, 2.0));
        let s = summarize(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert!((s.median - 2.5).abs() < 1e-9);
        assert!((s.mean - 2.5).abs() < 1e-9);
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let s = summarize(&[f64::NAN, 10.0, f64::INFINITY, 30.0]).unwrap();
        assert_eq!(s.count, 2);
        assert_eq!(s.median, 20.0);
        assert!(summarize(&[]).is_none());
        assert!(summarize(&[f64::NAN]).is_none());
    }
}
