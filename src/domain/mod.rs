pub mod path;
pub mod point;
pub mod settings;
pub mod yard;

pub use path::GeneratedPath;
pub use point::Point;
pub use settings::{PatternSettings, PatternType};
pub use yard::{BoundaryPolygon, NoGoZone, Yard};
