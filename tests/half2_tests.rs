//! Scenario tests for `Half2`

#[cfg(test)]
mod half2_tests {
    use packed_half::{Half, Half2};

    fn lanes_f32(v: Half2) -> (f32, f32) {
        (v.lo().to_f32(), v.hi().to_f32())
    }

    #[test]
    fn test_add() {
        assert_eq!(lanes_f32(Half2::from_i32(3) + Half2::from_i32(4)), (7.0, 7.0));
    }

    #[test]
    fn test_negate() {
        assert_eq!(lanes_f32(-Half2::from_i32(3)), (-3.0, -3.0));
    }

    #[test]
    fn test_mul() {
        assert_eq!(lanes_f32(Half2::from_i32(2) * Half2::from_i32(5)), (10.0, 10.0));
    }

    #[test]
    fn test_compound_add() {
        let mut a = Half2::from_i32(1);
        a += Half2::from_i32(2);
        assert!(a == Half2::from_i32(3));
    }

    #[test]
    fn test_div() {
        assert_eq!(lanes_f32(Half2::from_i32(6) / Half2::from_i32(3)), (2.0, 2.0));
    }

    #[test]
    fn test_equality() {
        assert!(Half2::from_i32(5) == Half2::from_i32(5));
        assert!(Half2::from_i32(5) != Half2::from_i32(4));
    }

    #[test]
    fn test_sub_and_division_rounding() {
        assert_eq!(lanes_f32(Half2::from_i32(2) - Half2::from_i32(5)), (-3.0, -3.0));
        // 1/3 rounds to the nearest binary16: 0x3555
        assert_eq!((Half2::from_i32(1) / Half2::from_i32(3)).to_bits(), 0x3555_3555);
    }

    #[test]
    fn test_overflow_to_infinity() {
        let big = Half2::splat(Half::MAX);
        let sum = big + big;
        assert!(sum.lo().is_infinite() && sum.hi().is_infinite());
        assert!(!sum.lo().is_sign_negative());
    }

    #[test]
    fn test_division_by_zero() {
        let q = Half2::from_i32(1) / Half2::from_i32(0);
        assert!(q.lo().is_infinite());
        let nan = Half2::from_i32(0) / Half2::from_i32(0);
        assert!(nan.lo().is_nan() && nan.hi().is_nan());
        assert!(nan != nan);
    }

    #[test]
    fn test_lanes_stay_independent() {
        // lane 0 = 1.0, lane 1 = 2.0
        let a = Half2::from_bits(0x4000_3C00);
        // lane 0 = 3.0, lane 1 = 0.5
        let b = Half2::from_bits(0x3800_4200);
        assert_eq!(lanes_f32(a + b), (4.0, 2.5));
        assert_eq!(lanes_f32(a - b), (-2.0, 1.5));
        assert_eq!(lanes_f32(a * b), (3.0, 1.0));
        assert_eq!(lanes_f32(b / a), (3.0, 0.25));
    }

    #[test]
    fn test_equality_is_all_lanes() {
        let a = Half2::from_bits(0x4000_3C00);
        assert!(a != Half2::from_bits(0x3C00_3C00));
        assert!(a != Half2::from_bits(0x4000_4000));
        assert!(a == Half2::from_bits(0x4000_3C00));
    }

    #[test]
    fn test_default_then_write() {
        let mut v = Half2::default();
        v.assign(Half2::from_i32(8));
        v -= 3;
        assert_eq!(lanes_f32(v), (5.0, 5.0));
    }

    #[test]
    fn test_copies_are_independent() {
        let a = Half2::from_i32(2);
        let mut b = a;
        b *= 4;
        assert_eq!(lanes_f32(a), (2.0, 2.0));
        assert_eq!(lanes_f32(b), (8.0, 8.0));
    }

    #[test]
    fn test_shared_across_threads() {
        let v = Half2::from_i32(21);
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || v * Half2::from_i32(2)))
            .collect();
        for h in handles {
            assert!(h.join().unwrap() == Half2::from_i32(42));
        }
    }

    #[cfg(half2_native)]
    #[test]
    fn test_native_wrapper_roundtrip() {
        use packed_half::NativeHalf2;
        let v = Half2::from_native(NativeHalf2::from_bits(0x4000_3C00));
        assert_eq!(v.native().to_bits(), 0x4000_3C00);
        assert_eq!(lanes_f32(v), (1.0, 2.0));
    }

    #[cfg(not(half2_native))]
    #[test]
    fn test_two_scalar_constructor() {
        let v = Half2::new(Half::from_f32(1.0), Half::from_f32(2.0));
        assert_eq!(v.to_bits(), 0x4000_3C00);
        assert_eq!(lanes_f32(v), (1.0, 2.0));
    }
}
