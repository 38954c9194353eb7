mod camera;
mod clock;
mod session;

pub use camera::{BoardLayout, CameraRig};
pub use clock::TickClock;
pub use session::{Phase, Session};
