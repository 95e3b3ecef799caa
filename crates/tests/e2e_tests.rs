//! End to end tests
#[cfg(test)]
mod e2e {
    use gravity::{Attractor, Body, Config, DragZone, Mode, Vector2, Viewport, World};

    fn setup_logging() {
        let _result = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .without_time()
            .try_init();
    }

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    /// Every body's position and velocity, as raw bits.
    fn snapshot(world: &World) -> Vec<[u32; 4]> {
        world
            .bodies()
            .iter()
            .map(|body| {
                [
                    body.position.x.to_bits(),
                    body.position.y.to_bits(),
                    body.velocity.x.to_bits(),
                    body.velocity.y.to_bits(),
                ]
            })
            .collect()
    }

    /// A fixed history of spawns, mode changes and frames.
    fn scripted_session(world: &mut World) -> Vec<Vec<[u32; 4]>> {
        let mut history = Vec::new();
        for frame in 0_u32..120 {
            match frame {
                5 => {
                    world.spawn_body_at(300.0, 200.0).unwrap();
                }
                20 => world.set_mode(Mode::Chaos),
                21 => {
                    world.spawn_body_at(500.0, 100.0).unwrap();
                }
                40 => world.spawn_attractor_at(200.0, 400.0).unwrap(),
                60 => world.set_mode(Mode::Snow),
                61 => {
                    world.spawn_body_at(650.0, 450.0).unwrap();
                }
                90 => world.soft_reset().unwrap(),
                _ => (),
            }
            world.step().unwrap();
            history.push(snapshot(world));
        }
        history
    }

    #[test]
    fn same_seed_and_events_are_bit_identical() {
        setup_logging();
        let mut first = World::new(viewport(), Config::default(), 4242).unwrap();
        let mut second = World::new(viewport(), Config::default(), 4242).unwrap();

        assert_eq!(scripted_session(&mut first), scripted_session(&mut second));
    }

    #[test]
    fn reseeding_reproduces_a_session() {
        let mut world = World::new(viewport(), Config::default(), 77).unwrap();
        let original = scripted_session(&mut world);

        world.set_mode(Mode::Calm);
        world.soft_reset().unwrap();
        assert_eq!(scripted_session(&mut world), original);
    }

    #[test]
    fn body_below_attractor_is_pulled_up() {
        let mut world = World::empty(viewport(), Config::default(), 1);
        world.add_attractor(Attractor::new(Vector2::new(500.0, 500.0), 50.0).unwrap());
        world.add_body(Body::new(Vector2::new(500.0, 600.0), Vector2::ZERO, 20.0, 1000).unwrap());
        world.set_mode(Mode::Calm);

        world.step().unwrap();

        let velocity = world.bodies()[0].velocity;
        assert!(velocity.y < 0.0);
        assert!(velocity.magnitude() > 0.0);
    }

    #[test]
    fn bodies_beyond_the_margin_are_purged_on_the_next_pass() {
        let mut world = World::empty(viewport(), Config::default(), 1);
        world.add_body(Body::new(Vector2::new(-60.0, 300.0), Vector2::ZERO, 10.0, 1000).unwrap());
        world.step().unwrap();
        assert!(world.bodies().is_empty());
    }

    #[test]
    fn full_viewport_drag_zone_applies_a_tenth_of_velocity() {
        let mut world = World::empty(viewport(), Config::default(), 1);
        world.set_drag_zone(DragZone::new(0.0, 0.0, 800.0, 600.0));
        world.add_body(
            Body::new(Vector2::new(400.0, 300.0), Vector2::new(10.0, 0.0), 1.0, 1000).unwrap(),
        );

        world.accumulate_forces().unwrap();
        let acceleration = world.bodies()[0].acceleration;
        assert!((acceleration.x - -1.0).abs() < f32::EPSILON);
        assert!(acceleration.y.abs() < f32::EPSILON);

        world.integrate();
        let velocity = world.bodies()[0].velocity;
        assert!((velocity.x - 9.0).abs() < f32::EPSILON);
    }

    #[test]
    fn every_body_is_purged_exactly_when_it_expires() {
        let mut config = Config::default();
        config.decay_time = 30;
        let mut world = World::new(viewport(), config, 9).unwrap();
        world.spawn_body_at(400.0, 300.0).unwrap();

        let mut lifetimes: Vec<i64> = world.bodies().iter().map(|body| body.remaining_lifetime).collect();
        while !world.bodies().is_empty() {
            world.step().unwrap();
            for body in world.bodies() {
                assert!(body.remaining_lifetime > 0);
            }
            let next: Vec<i64> = world.bodies().iter().map(|body| body.remaining_lifetime).collect();
            assert!(next.iter().all(|lifetime| lifetime < &lifetimes[0]));
            lifetimes = next;
            assert!(world.frame_count() <= 30);
        }
    }

    #[test]
    fn attraction_is_strictly_monotonic_inside_the_clamp() {
        let attractor = Attractor::new(Vector2::ZERO, 50.0).unwrap();
        let at = |distance: f32, mass: f32| {
            let body = Body::new(Vector2::new(distance, 0.0), Vector2::ZERO, mass, 1).unwrap();
            attractor.attract(&body).magnitude()
        };

        assert!(at(5.0, 10.0) > at(6.0, 10.0));
        assert!(at(24.0, 10.0) > at(25.0, 10.0));
        assert!(at(10.0, 20.0) > at(10.0, 10.0));
        assert!((at(3.0, 10.0) - at(5.0, 10.0)).abs() < 1e-4);
    }

    #[tokio::test]
    async fn session_driven_over_json() {
        setup_logging();
        let config = gravity_field::config::Config::default();
        let mut first = gravity_field::session::Session::new(&config, Some(11)).unwrap();
        let mut second = gravity_field::session::Session::new(&config, Some(11)).unwrap();
        let input = "{\"key\": {\"key\": \"l\"}}\n{\"click\": {\"x\": 100, \"y\": 100}}\n";
        let settings = gravity_field::run::DriverSettings::new(1000, Some(5));

        let mut first_output = Vec::new();
        let mut second_output = Vec::new();
        gravity_field::run::drive(&mut first, input.as_bytes(), &mut first_output, settings)
            .await
            .unwrap();
        gravity_field::run::drive(&mut second, input.as_bytes(), &mut second_output, settings)
            .await
            .unwrap();

        assert_eq!(first_output, second_output);
        let last_line = std::str::from_utf8(&first_output)
            .unwrap()
            .lines()
            .last()
            .unwrap()
            .to_owned();
        let json: serde_json::Value = serde_json::from_str(&last_line).unwrap();
        assert_eq!(json["frame"]["number"], 5);
        assert_eq!(json["frame"]["bodies"].as_array().unwrap().len(), 4);
    }
}
