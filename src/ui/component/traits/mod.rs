mod highlight;
mod select;

pub use highlight::Highlight;
pub use select::Select;
