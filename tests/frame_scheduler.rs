mod tests {
    use embassy_time::{Duration, Instant};
    use five_spheres::color::{Color, Rgb};
    use five_spheres::{
        DaylightConfig, FrameScheduler, LightMode, LightSensor, PIXEL_COUNT, PixelSink, Playlist,
        Scene, Sequencer, SpheresConfig,
    };

    #[derive(Default)]
    struct RecordingSink {
        pixels: [Rgb; PIXEL_COUNT],
        shows: usize,
    }

    impl PixelSink for RecordingSink {
        fn set_pixel(&mut self, index: usize, color: Rgb) {
            self.pixels[index] = color;
        }

        fn show(&mut self) {
            self.shows += 1;
        }
    }

    struct FixedSensor(u16);

    impl LightSensor for FixedSensor {
        fn read(&mut self) -> u16 {
            self.0
        }
    }

    fn config() -> SpheresConfig {
        SpheresConfig {
            sensor_interval: Duration::from_millis(100),
            daylight: DaylightConfig {
                threshold: 80,
                switch_delay: 2,
            },
            ..SpheresConfig::default()
        }
    }

    fn scene() -> Scene {
        Scene::single_color(Color::from_hue(0.66))
    }

    fn scheduler(level: u16) -> FrameScheduler<RecordingSink, FixedSensor, 4> {
        let config = config();
        let sequencer = Sequencer::new(
            scene(),
            Playlist::new(),
            config.sequencer_timings(),
            Instant::from_millis(0),
        );
        FrameScheduler::new(
            sequencer,
            RecordingSink::default(),
            FixedSensor(level),
            &config,
        )
    }

    #[test]
    fn test_tick_renders_and_paces() {
        let mut scheduler = scheduler(0);
        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
        assert_eq!(scheduler.output().pixels, scene().frame());
        assert_eq!(scheduler.output().shows, 1);

        let result = scheduler.tick(Instant::from_millis(25));
        assert_eq!(result.next_deadline, Instant::from_millis(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(15));
    }

    #[test]
    fn test_drift_correction() {
        let mut scheduler = scheduler(0);
        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(1000));
        assert_eq!(result.next_deadline, Instant::from_millis(1020));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }

    #[test]
    fn test_day_mode_turns_off() {
        let mut scheduler = scheduler(200);
        scheduler.tick(Instant::from_millis(0));
        assert_eq!(scheduler.mode(), LightMode::Night);
        assert_eq!(scheduler.output().pixels, scene().frame());

        // Second sample switches to day and blanks the strip once
        scheduler.tick(Instant::from_millis(100));
        assert_eq!(scheduler.mode(), LightMode::Day);
        assert!(scheduler.sequencer().is_suspended());
        assert_eq!(scheduler.output().pixels, Scene::new().frame());
        let shows = scheduler.output().shows;

        scheduler.tick(Instant::from_millis(120));
        assert_eq!(scheduler.output().shows, shows);
    }

    #[test]
    fn test_night_mode_resumes() {
        let mut scheduler = scheduler(200);
        scheduler.tick(Instant::from_millis(0));
        scheduler.tick(Instant::from_millis(100));
        assert_eq!(scheduler.mode(), LightMode::Day);

        scheduler.sensor_mut().0 = 10;
        scheduler.tick(Instant::from_millis(200));
        assert_eq!(scheduler.mode(), LightMode::Day);
        scheduler.tick(Instant::from_millis(300));
        assert_eq!(scheduler.mode(), LightMode::Night);
        assert!(!scheduler.sequencer().is_suspended());
        assert_eq!(scheduler.output().pixels, scene().frame());
    }

    #[test]
    fn test_sensor_sampled_at_interval() {
        let mut scheduler = scheduler(200);
        scheduler.tick(Instant::from_millis(0));
        // Frames between samples do not count toward the switch delay
        scheduler.tick(Instant::from_millis(20));
        scheduler.tick(Instant::from_millis(40));
        assert_eq!(scheduler.mode(), LightMode::Night);
        scheduler.tick(Instant::from_millis(100));
        assert_eq!(scheduler.mode(), LightMode::Day);
    }
}
