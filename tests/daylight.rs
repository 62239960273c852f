mod tests {
    use five_spheres::{DaylightConfig, DaylightDetector, LightMode, LightSensor};

    const CONFIG: DaylightConfig = DaylightConfig {
        threshold: 80,
        switch_delay: 3,
    };

    struct FixedSensor(u16);

    impl LightSensor for FixedSensor {
        fn read(&mut self) -> u16 {
            self.0
        }
    }

    #[test]
    fn test_starts_at_night() {
        let detector = DaylightDetector::new(CONFIG);
        assert_eq!(detector.mode(), LightMode::Night);
    }

    #[test]
    fn test_switches_after_delay() {
        let mut detector = DaylightDetector::new(CONFIG);
        assert_eq!(detector.update(80), None);
        assert_eq!(detector.update(200), None);
        assert_eq!(detector.update(90), Some(LightMode::Day));
        assert_eq!(detector.mode(), LightMode::Day);

        assert_eq!(detector.update(200), None);
        assert_eq!(detector.update(10), None);
        assert_eq!(detector.update(10), None);
        assert_eq!(detector.update(79), Some(LightMode::Night));
    }

    #[test]
    fn test_agreeing_sample_resets_count() {
        let mut detector = DaylightDetector::new(CONFIG);
        assert_eq!(detector.update(100), None);
        assert_eq!(detector.update(100), None);
        assert_eq!(detector.update(10), None);
        assert_eq!(detector.update(100), None);
        assert_eq!(detector.update(100), None);
        assert_eq!(detector.mode(), LightMode::Night);
        assert_eq!(detector.update(100), Some(LightMode::Day));
    }

    #[test]
    fn test_zero_delay_switches_on_first_sample() {
        let config = DaylightConfig {
            threshold: 80,
            switch_delay: 0,
        };
        let mut detector = DaylightDetector::new(config);
        assert_eq!(detector.update(10), None);
        assert_eq!(detector.update(100), Some(LightMode::Day));
        assert_eq!(detector.update(10), Some(LightMode::Night));
    }

    #[test]
    fn test_disabled_threshold_never_switches() {
        let config = DaylightConfig::default();
        assert!(!config.is_enabled());

        let mut detector = DaylightDetector::new(config);
        for _ in 0..10 {
            assert_eq!(detector.update(u16::MAX), None);
        }
        assert_eq!(detector.mode(), LightMode::Night);
    }

    #[test]
    fn test_sample_reads_sensor() {
        let config = DaylightConfig {
            threshold: 50,
            switch_delay: 1,
        };
        let mut detector = DaylightDetector::new(config);
        let mut sensor = FixedSensor(60);
        assert_eq!(detector.sample(&mut sensor), Some(LightMode::Day));
        sensor.0 = 20;
        assert_eq!(detector.sample(&mut sensor), Some(LightMode::Night));
    }
}
