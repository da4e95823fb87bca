// Human-readable counts for console output.

pub fn format_count(count: u64) -> String {
    if count < 10u64.pow(3) {
        format!("{}", count)
    }
    else if count < 10u64.pow(6) {
        format!("{:.1}K", count as f64 / 10u64.pow(3) as f64)
    }
    else if count < 10u64.pow(9) {
        format!("{:.1}M", count as f64 / 10u64.pow(6) as f64)
    }
    else {
        format!("{:.1}G", count as f64 / 10u64.pow(9) as f64)
    }
}

pub fn format_density(density: f64) -> String {
    let percent = density * 100.0;
    if percent > 0.0 && percent < 0.01 {
        format!("{:.3e}%", percent)
    }
    else {
        format!("{:.2}%", percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1500), "1.5K");
        assert_eq!(format_count(2_000_000), "2.0M");
        assert_eq!(format_count(52_000_000_000), "52.0G");
    }

    #[test]
    fn test_format_density() {
        assert_eq!(format_density(0.52), "52.00%");
        assert_eq!(format_density(0.0), "0.00%");
        assert_eq!(format_density(1.0), "100.00%");
        assert_eq!(format_density(0.0001), "0.01%");
        assert_eq!(format_density(0.00001), "1.000e-3%");
        assert_eq!(format_density(0.000000025), "2.500e-6%");
    }
}
