/// Descriptive summary drawn as one box.
///
/// Quartiles use linear interpolation between order statistics. Whiskers
/// reach the most extreme observations within 1.5 IQR of the box; anything
/// beyond is an outlier.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

const WHISKER_IQR: f64 = 1.5;

impl BoxStats {
    /// `None` for an empty sample; non-finite values are ignored.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR * iqr;
        let high_fence = q3 + WHISKER_IQR * iqr;

        let within = |v: &f64| (low_fence..=high_fence).contains(v);
        let (lower_whisker, upper_whisker) = sorted
            .iter()
            .copied()
            .filter(within)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| !within(v))
            .collect();

        Some(Self {
            count: sorted.len(),
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }

    /// Smallest and largest value the box will draw, outliers included.
    pub fn extent(&self) -> (f64, f64) {
        self.outliers.iter().fold(
            (self.lower_whisker, self.upper_whisker),
            |(lo, hi), &v| (lo.min(v), hi.max(v)),
        )
    }
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}
