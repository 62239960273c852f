mod tests {
    use embassy_time::Duration;
    use five_spheres::math::{lerp, normalize, progress, u8_to_unit, unit_to_u8};

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_normalize_in_range() {
        assert_eq!(normalize(0.0), 0.0);
        assert_eq!(normalize(0.5), 0.5);
        assert_eq!(normalize(0.999), 0.999);
    }

    #[test]
    fn test_normalize_wraps() {
        assert_eq!(normalize(1.0), 0.0);
        assert_close(normalize(1.25), 0.25);
        assert_close(normalize(7.5), 0.5);
        assert_close(normalize(-0.25), 0.75);
        assert_close(normalize(-3.75), 0.25);
        assert_close(normalize(-1.0), 0.0);
    }

    #[test]
    fn test_normalize_far_outside() {
        for value in [123.375_f32, -250.125, 1000.5] {
            let wrapped = normalize(value);
            assert!((0.0..1.0).contains(&wrapped));
            assert_close(wrapped, value.rem_euclid(1.0));
        }
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.2, 0.8, 0.0), 0.2);
        assert_eq!(lerp(0.2, 0.8, 1.0), 0.8);
        assert_close(lerp(0.0, 1.0, 0.25), 0.25);
    }

    #[test]
    fn test_progress() {
        assert_eq!(
            progress(Duration::from_millis(0), Duration::from_millis(100)),
            0.0
        );
        assert_eq!(
            progress(Duration::from_millis(50), Duration::from_millis(100)),
            0.5
        );
        assert_eq!(
            progress(Duration::from_millis(100), Duration::from_millis(100)),
            1.0
        );
        assert_eq!(
            progress(Duration::from_millis(250), Duration::from_millis(100)),
            1.0
        );
        assert_eq!(
            progress(Duration::from_millis(0), Duration::from_millis(0)),
            1.0
        );
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(unit_to_u8(0.0), 0);
        assert_eq!(unit_to_u8(1.0), 255);
        assert_eq!(unit_to_u8(0.5), 128);
        assert_eq!(unit_to_u8(-0.5), 0);
        assert_eq!(unit_to_u8(2.0), 255);
        assert_eq!(u8_to_unit(255), 1.0);
        assert_eq!(u8_to_unit(0), 0.0);
    }
}
