// Dynamic widgets: decorative effects and micro-interactions.

mod background;
mod magnetic;
mod reveal;
mod scroll_progress;
mod sparkle_trail;

pub use background::BackgroundFx;
pub use magnetic::MagneticButton;
pub use reveal::{use_reveal, REVEAL_THRESHOLD};
pub use scroll_progress::ScrollProgress;
pub use sparkle_trail::SparkleTrail;
