//! These are all the types needed to talk to a Gravity Field simulation.
//!
//! Messages are newline-delimited JSON. A front end sends raw input events and receives one
//! rendered frame per simulation step.

#![expect(clippy::pub_use, reason = "This seems to come from the `bon` crate")]

/// An RGBA colour, each channel 0-255.
pub type Colour = (u8, u8, u8, u8);

/// A filled circle to draw.
#[derive(serde::Serialize, serde::Deserialize, bon::Builder, Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct Circle {
    /// The centre of the circle. [0, 0] is in the top-left.
    pub position: (f32, f32),
    /// The diameter of the circle.
    pub diameter: f32,
    /// The fill colour.
    pub colour: Colour,
}

/// A line of overlay text.
#[derive(serde::Serialize, serde::Deserialize, bon::Builder, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Text {
    /// The text to display.
    pub text: String,
    /// Where the text's baseline starts. [0, 0] is in the top-left.
    pub coordinates: (f32, f32),
    /// The text colour.
    pub colour: Colour,
}

/// Everything needed to draw a single frame.
#[derive(serde::Serialize, serde::Deserialize, bon::Builder, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Frame {
    /// The number of frames stepped since startup or the last reset.
    pub number: u64,
    /// The colour to clear the canvas with.
    pub background: Colour,
    /// One circle per body.
    #[builder(default)]
    pub bodies: Vec<Circle>,
    /// One circle per attractor.
    #[builder(default)]
    pub attractors: Vec<Circle>,
    /// Overlay text. Empty when the overlay is hidden.
    #[builder(default)]
    pub overlay: Vec<Text>,
}

/// The various kinds of messages that a front end can send to the simulation.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum InputMessages {
    /// A pointer press.
    Click {
        /// Horizontal position of the pointer.
        x: f32,
        /// Vertical position of the pointer.
        y: f32,
        /// Whether the shift modifier was held.
        #[serde(default)]
        shift: bool,
    },
    /// A key press.
    Key {
        /// The key's character.
        key: char,
    },
    /// Sent whenever the canvas resizes.
    Resize {
        /// The new width.
        width: f32,
        /// The new height.
        height: f32,
    },
}

/// All the message kinds that the simulation sends to the front end.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum OutputMessages {
    /// A rendered frame.
    Frame(Frame),
}
