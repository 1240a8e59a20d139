//! 历史柱状图高度计算

/// 柱子最小高度（百分比），保证极小值仍然可见
pub const MIN_BAR_PERCENT: f64 = 8.0;

/// 将历史序列映射为相对最大值的百分比高度
///
/// 最大值为 0 时所有柱子返回最小高度；空序列返回空结果。
pub fn bar_heights(history: &[u32], min_percent: f64) -> Vec<f64> {
    let max = history.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![min_percent; history.len()];
    }

    history
        .iter()
        .map(|&value| (f64::from(value) / f64::from(max) * 100.0).max(min_percent))
        .collect()
}

/// 转换为 Sparkline 使用的整数柱高 (0..=100)
pub fn sparkline_values(history: &[u32], min_percent: f64) -> Vec<u64> {
    bar_heights(history, min_percent)
        .into_iter()
        .map(|h| h.round().clamp(0.0, 100.0) as u64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_maps_to_full_height() {
        let heights = bar_heights(&[50, 100, 25], MIN_BAR_PERCENT);
        assert_eq!(heights, vec![50.0, 100.0, 25.0]);
    }

    #[test]
    fn test_all_equal() {
        let heights = bar_heights(&[42; 12], MIN_BAR_PERCENT);
        assert!(heights.iter().all(|&h| h == 100.0));
    }

    #[test]
    fn test_floor_applies_to_small_values() {
        let heights = bar_heights(&[1, 100], MIN_BAR_PERCENT);
        assert_eq!(heights[0], MIN_BAR_PERCENT);
        assert_eq!(heights[1], 100.0);
    }

    #[test]
    fn test_zero_and_empty_are_guarded() {
        assert_eq!(bar_heights(&[0, 0, 0], 5.0), vec![5.0, 5.0, 5.0]);
        assert!(bar_heights(&[], 5.0).is_empty());
    }

    #[test]
    fn test_sparkline_values() {
        let values = sparkline_values(&[85, 88, 92, 89, 95, 97, 93, 91, 95, 98, 96, 95], 8.0);
        assert_eq!(values.len(), 12);
        assert_eq!(values[9], 100);
        assert_eq!(values[0], 87);
        assert!(values.iter().all(|&v| v <= 100));
    }
}
