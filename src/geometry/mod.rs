mod bounds;
pub mod hit_testing;

pub use bounds::Bounds;
pub use hit_testing::{
    distance, is_point_near_handle, point_in_ellipse, point_in_rectangle, point_in_stroke,
    point_near_segment, stroke_bounds,
};
