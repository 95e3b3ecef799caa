//! Turn the state of the world into a frame that a front end can draw.

use palette::{Srgb, WithAlpha as _};

use crate::config::Keybindings;

/// Distance between overlay lines.
const LINE_HEIGHT: f32 = 20.0;
/// Distance of the stats column from the left edge.
const STATS_COLUMN: f32 = 20.0;
/// Distance of the help column from the right edge.
const HELP_COLUMN_OFFSET: f32 = 170.0;

/// The colours used for a mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Canvas background
    pub background: Srgb<u8>,
    /// Body fill, before fading
    pub body: Srgb<u8>,
    /// Attractor fill
    pub attractor: Srgb<u8>,
    /// Overlay text
    pub text: Srgb<u8>,
}

impl Theme {
    /// The theme for the given mode.
    #[must_use]
    pub fn for_mode(mode: gravity::Mode) -> Self {
        let white = Srgb::new(255, 255, 255);
        let black = Srgb::new(0, 0, 0);
        match mode {
            gravity::Mode::Calm => Self {
                background: Srgb::new(30, 30, 30),
                body: Srgb::new(200, 200, 255),
                attractor: Srgb::new(255, 100, 100),
                text: white,
            },
            gravity::Mode::Chaos => Self {
                background: Srgb::new(200, 200, 200),
                body: Srgb::new(20, 20, 20),
                attractor: Srgb::new(0, 55, 155),
                text: black,
            },
            gravity::Mode::Snow => Self {
                background: Srgb::new(80, 80, 80),
                body: Srgb::new(230, 230, 255),
                attractor: Srgb::new(135, 255, 135),
                text: white,
            },
            gravity::Mode::Wind => Self {
                background: Srgb::new(245, 245, 245),
                body: Srgb::new(10, 10, 10),
                attractor: Srgb::new(255, 175, 40),
                text: black,
            },
        }
    }
}

/// Convert to the protocol's colour, with the given alpha.
fn to_protocol(colour: Srgb<u8>, alpha: u8) -> gravity_protocol::Colour {
    colour.with_alpha(alpha).into_components()
}

/// Map the remaining lifetime linearly from `[0, decay_time]` to an alpha of `[0, 255]`.
#[must_use]
#[expect(
    clippy::as_conversions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The value is clamped to the range of a `u8` first"
)]
pub fn fade_alpha(remaining_lifetime: i64, decay_time: i64) -> u8 {
    if decay_time <= 0 {
        return 0;
    }
    let fraction = remaining_lifetime as f32 / decay_time as f32;
    (fraction * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Builds frames from the world.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    /// Shown in the overlay's help text
    keybindings: Keybindings,
}

impl Renderer {
    /// Instantiate
    #[must_use]
    pub const fn new(keybindings: Keybindings) -> Self {
        Self { keybindings }
    }

    /// A complete frame for the current state of the world.
    #[must_use]
    pub fn frame(&self, world: &gravity::World, show_overlay: bool) -> gravity_protocol::Frame {
        let theme = Theme::for_mode(world.mode());
        let decay_time = world.config().decay_time;

        let bodies = world
            .bodies()
            .iter()
            .map(|body| {
                let alpha = fade_alpha(body.remaining_lifetime, decay_time);
                gravity_protocol::Circle::builder()
                    .position((body.position.x, body.position.y))
                    .diameter(body.mass())
                    .colour(to_protocol(theme.body, alpha))
                    .build()
            })
            .collect();

        let attractors = world
            .attractors()
            .iter()
            .map(|attractor| {
                let position = attractor.position();
                gravity_protocol::Circle::builder()
                    .position((position.x, position.y))
                    .diameter(attractor.mass())
                    .colour(to_protocol(theme.attractor, u8::MAX))
                    .build()
            })
            .collect();

        let overlay = if show_overlay {
            self.overlay(world, theme)
        } else {
            Vec::new()
        };

        gravity_protocol::Frame::builder()
            .number(world.frame_count())
            .background(to_protocol(theme.background, u8::MAX))
            .bodies(bodies)
            .attractors(attractors)
            .overlay(overlay)
            .build()
    }

    /// Key help on the right, and stats on the left.
    fn overlay(&self, world: &gravity::World, theme: Theme) -> Vec<gravity_protocol::Text> {
        let keys = &self.keybindings;
        let help = [
            format!("{}: show overlay", keys.toggle_overlay.to_ascii_uppercase()),
            format!("{}: calm mode", keys.calm.to_ascii_uppercase()),
            format!("{}: chaos mode", keys.chaos.to_ascii_uppercase()),
            format!("{}: new seed", keys.hard_reset.to_ascii_uppercase()),
            format!("{}: reset seed", keys.soft_reset.to_ascii_uppercase()),
            format!("{}: snow mode", keys.snow.to_ascii_uppercase()),
            format!("{}: wind mode", keys.wind.to_ascii_uppercase()),
        ];
        let stats = [
            format!("Bodies: {}", world.bodies().len()),
            format!("Attractors: {}", world.attractors().len()),
            format!("Mode: {}", world.mode()),
            format!("Seed: {}", world.seed()),
        ];

        let colour = to_protocol(theme.text, u8::MAX);
        let help_column = world.viewport().width - HELP_COLUMN_OFFSET;
        let column = |x: f32, lines: &[String]| -> Vec<gravity_protocol::Text> {
            let mut y = 0.0;
            lines
                .iter()
                .map(|line| {
                    y += LINE_HEIGHT;
                    gravity_protocol::Text::builder()
                        .text(line.clone())
                        .coordinates((x, y))
                        .colour(colour)
                        .build()
                })
                .collect()
        };

        let mut overlay = column(help_column, &help);
        overlay.extend(column(STATS_COLUMN, &stats));
        overlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> gravity::World {
        let viewport = gravity::Viewport::new(800.0, 600.0).unwrap();
        gravity::World::new(viewport, gravity::Config::default(), 99).unwrap()
    }

    #[test]
    fn alpha_fades_with_age() {
        assert_eq!(fade_alpha(1000, 1000), 255);
        assert_eq!(fade_alpha(500, 1000), 128);
        assert_eq!(fade_alpha(0, 1000), 0);
        assert_eq!(fade_alpha(-5, 1000), 0);
        assert_eq!(fade_alpha(10, 0), 0);
    }

    #[test]
    fn frame_has_a_circle_per_body_and_attractor() {
        let world = world();
        let frame = Renderer::default().frame(&world, false);

        assert_eq!(frame.bodies.len(), 2);
        assert_eq!(frame.attractors.len(), 1);
        assert_eq!(frame.background, (30, 30, 30, 255));
        assert_eq!(frame.attractors[0].colour, (255, 100, 100, 255));
        assert_eq!(frame.bodies[0].colour, (200, 200, 255, 255));
        assert!(frame.overlay.is_empty());
    }

    #[test]
    fn overlay_shows_keys_and_stats() {
        let mut world = world();
        world.set_mode(gravity::Mode::Wind);
        let frame = Renderer::default().frame(&world, true);

        let lines: Vec<&str> = frame.overlay.iter().map(|text| text.text.as_str()).collect();
        assert!(lines.contains(&"T: show overlay"));
        assert!(lines.contains(&"N: new seed"));
        assert!(lines.contains(&"Bodies: 2"));
        assert!(lines.contains(&"Attractors: 1"));
        assert!(lines.contains(&"Mode: Hurricane"));
        assert!(lines.contains(&"Seed: 99"));
        assert_eq!(frame.overlay[0].coordinates, (630.0, 20.0));
        assert_eq!(frame.overlay[0].colour, (0, 0, 0, 255));
        assert_eq!(frame.background, (245, 245, 245, 255));
    }

    #[test]
    fn every_mode_has_a_theme() {
        let themes: Vec<Theme> = gravity::Mode::ALL.into_iter().map(Theme::for_mode).collect();
        assert_eq!(themes[1].attractor, Srgb::new(0, 55, 155));
        assert_eq!(themes[2].body, Srgb::new(230, 230, 255));
    }
}
