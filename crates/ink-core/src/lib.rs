pub mod input;
pub mod model;
pub mod recorder;
pub mod surface;

pub use input::PointerEvent;
pub use model::{Color, Point, Segment, StrokeStyle};
pub use recorder::StrokeRecorder;
pub use surface::{OpList, Surface, SurfaceOp};
