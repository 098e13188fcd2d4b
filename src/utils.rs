pub const fn div_ceil(dividend: usize, divisor: usize) -> usize {
    (dividend + divisor - 1) / divisor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up() {
        assert_eq!(0, div_ceil(0, 2));
        assert_eq!(1, div_ceil(1, 2));
        assert_eq!(1, div_ceil(2, 2));
        assert_eq!(2, div_ceil(3, 2));
        assert_eq!(41, div_ceil(81, 2));
    }
}
