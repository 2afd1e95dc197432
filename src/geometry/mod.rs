pub mod frame;
pub mod geodesic;

pub use frame::{BoundingExtent, LocalFrame, bounding_extent, max_centroid_distance, vertex_centroid};
pub use geodesic::{geodesic_area, geodesic_distance, path_length};
