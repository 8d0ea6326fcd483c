mod bits;
mod clock;
mod control;
mod core;
mod hud;
mod input;
mod platforms;
mod player;
mod props;

pub use bits::BitsPlugin;
pub use clock::ClockPlugin;
pub use control::ControlPlugin;
pub use self::core::CorePlugin;
pub use hud::HudPlugin;
pub use input::InputPlugin;
pub use platforms::PlatformsPlugin;
pub use player::PlayerPlugin;
pub use props::PropsPlugin;

pub(crate) use self::core::{FixedSet, UpdateSet};
