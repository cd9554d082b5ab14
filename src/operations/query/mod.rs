mod bounding_box;
mod collect;

pub use bounding_box::{
    get_all_component_bounds, BoundingBox, ComponentBounds, DEFAULT_BOUNDS_FILTER,
};
pub use collect::{flatten_all_filter, get_all_geoms, DEFAULT_ROOT_NAME};
