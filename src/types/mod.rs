mod datetime;
mod geo_point;
mod param;
mod polygon;
mod track;
mod way;

pub use datetime::*;
pub use geo_point::*;
pub use param::*;
pub use polygon::*;
pub use track::*;
pub use way::*;
