/// Format elapsed match-seconds as `MM:SS`.
///
/// Minutes are not capped: a 100-minute match renders as `100:30`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(45 * 60), "45:00");
        assert_eq!(format_clock(100 * 60 + 30), "100:30");
    }
}
