//! Statistical tests of the validation study
//!
//! - [`fisher`]: Enrichment of predicted genes in a second gene set, e.g.
//!   tissue-enriched genes or the predictions of another method.
//! - [`ranks`]: Leave-one-out rank distributions, including the random rank
//!   baseline and empirical CDF curves.
//! - [`wilcoxon`]: Paired comparison of rank distributions.
//!
//! All p-values are one-sided. Use [`format_pvalue`] to display them.

pub mod fisher;
pub mod ranks;
pub mod wilcoxon;

/// Formats a p-value for display, using the usual significance stars
///
/// This is purely presentational, the p-value itself is never rounded.
///
/// # Examples
///
/// ```
/// use gba_validation::stats::format_pvalue;
///
/// assert_eq!(format_pvalue(0.00001), "p < 1e-4****");
/// assert_eq!(format_pvalue(0.0197), "p < 0.05*");
/// assert_eq!(format_pvalue(0.0726), "p = 7.3e-02");
/// ```
pub fn format_pvalue(pvalue: f64) -> String {
    if pvalue < 1e-4 {
        "p < 1e-4****".to_string()
    } else if pvalue < 1e-3 {
        "p < 0.001***".to_string()
    } else if pvalue < 1e-2 {
        "p < 0.01**".to_string()
    } else if pvalue < 0.05 {
        "p < 0.05*".to_string()
    } else {
        format!("p = {}", scientific(pvalue))
    }
}

/// Two significant digits with a signed, two-digit exponent (`7.3e-02`)
fn scientific(value: f64) -> String {
    let formatted = format!("{value:.1e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn significance_buckets() {
        assert_eq!(format_pvalue(0.0), "p < 1e-4****");
        assert_eq!(format_pvalue(0.000_099), "p < 1e-4****");
        assert_eq!(format_pvalue(0.0001), "p < 0.001***");
        assert_eq!(format_pvalue(0.000_999), "p < 0.001***");
        assert_eq!(format_pvalue(0.001), "p < 0.01**");
        assert_eq!(format_pvalue(0.01), "p < 0.05*");
        assert_eq!(format_pvalue(0.049_99), "p < 0.05*");
    }

    #[test]
    fn not_significant() {
        assert_eq!(format_pvalue(0.05), "p = 5.0e-02");
        assert_eq!(format_pvalue(0.5), "p = 5.0e-01");
        assert_eq!(format_pvalue(1.0), "p = 1.0e+00");
        assert_eq!(format_pvalue(0.072_626), "p = 7.3e-02");
    }
}
