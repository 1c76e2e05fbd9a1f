pub mod bitmap;
pub mod image;
pub mod plan;

pub use self::image::save_heatmap;
pub use self::plan::save_plan;
