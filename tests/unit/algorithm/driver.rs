//! Tests for the phase rotation driver

#[cfg(test)]
mod tests {
    use domino_shuffle::TilingError;
    use domino_shuffle::algorithm::driver::{Driver, Phase};
    use domino_shuffle::algorithm::tiling::Tiling;
    use domino_shuffle::render::Headless;
    use futures::executor::block_on;

    fn seeded_driver(seed: u64) -> Driver<Headless> {
        Driver::new(Tiling::with_seed(Headless::new(), seed).expect("valid tiling"))
    }

    #[test]
    fn test_phase_rotation() {
        assert_eq!(Phase::Fill.next(), Phase::Zap);
        assert_eq!(Phase::Zap.next(), Phase::Expand);
        assert_eq!(Phase::Expand.next(), Phase::Fill);
        assert_eq!(Phase::Expand.to_string(), "expand");
    }

    // Tests steps run fill, zap, expand in order and report the phase run
    #[test]
    fn test_step_follows_rotation() {
        let mut driver = seeded_driver(3);
        assert_eq!(driver.phase(), Phase::Fill);

        let ran: Vec<Phase> = (0..6)
            .map(|_| block_on(driver.step()).expect("step succeeds"))
            .collect();

        assert_eq!(
            ran,
            vec![
                Phase::Fill,
                Phase::Zap,
                Phase::Expand,
                Phase::Fill,
                Phase::Zap,
                Phase::Expand,
            ]
        );
        assert_eq!(driver.steps(), 6);
        assert_eq!(driver.tiling().size(), 3);
        assert_eq!(driver.order_label(), "A(3)");
    }

    #[test]
    fn test_cycle_returns_to_fill() {
        let mut driver = seeded_driver(8);

        block_on(driver.cycle()).expect("cycle succeeds");

        assert_eq!(driver.phase(), Phase::Fill);
        assert_eq!(driver.steps(), 3);
        assert_eq!(driver.tiling().size(), 2);
    }

    // Tests running to an order stops with the diamond fully tiled
    #[test]
    fn test_run_until_stops_after_final_fill() {
        let mut driver = seeded_driver(21);
        let mut observed = Vec::new();

        block_on(driver.run_until(4, |phase, tiling| {
            observed.push((phase, tiling.size()));
        }))
        .expect("run succeeds");

        let tiling = driver.tiling();
        assert_eq!(tiling.size(), 4);
        assert_eq!(tiling.grid().free_count(), 0);
        assert_eq!(tiling.tiles().len(), 4 * 5);
        assert_eq!(driver.phase(), Phase::Zap);
        assert_eq!(observed.len(), 10);
        assert_eq!(observed.last(), Some(&(Phase::Fill, 4)));
        assert_eq!(observed.first(), Some(&(Phase::Fill, 1)));
    }

    // Tests order one needs only the initial fill
    #[test]
    fn test_run_until_first_order() {
        let mut driver = seeded_driver(2);

        block_on(driver.run_until(1, |_, _| {})).expect("run succeeds");

        assert_eq!(driver.steps(), 1);
        assert_eq!(driver.tiling().tiles().len(), 2);
    }

    // Tests asking for an order already passed is rejected without stepping
    #[test]
    fn test_run_until_rejects_past_orders() {
        let mut driver = seeded_driver(5);
        block_on(driver.run_until(3, |_, _| {})).expect("run succeeds");
        let steps = driver.steps();

        let error = block_on(driver.run_until(2, |_, _| {})).unwrap_err();

        assert!(matches!(
            error,
            TilingError::InvalidParameter {
                parameter: "order",
                ..
            }
        ));
        assert_eq!(driver.steps(), steps);

        // Re-running to the current order is a no-op
        block_on(driver.run_until(3, |_, _| {})).expect("already there");
        assert_eq!(driver.steps(), steps);
    }

    // Tests a run can be resumed towards a larger order
    #[test]
    fn test_run_until_resumes() {
        let mut driver = seeded_driver(13);
        block_on(driver.run_until(2, |_, _| {})).expect("run succeeds");

        block_on(driver.run_until(5, |_, _| {})).expect("run succeeds");

        let tiling = driver.into_tiling();
        assert_eq!(tiling.size(), 5);
        assert_eq!(tiling.tiles().len(), 5 * 6);
        tiling.check_invariants().expect("consistent");
    }
}
