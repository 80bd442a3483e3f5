pub mod ecmascript;
pub mod html;
pub mod indexmap;
pub mod path_ext;

pub use concat_string::concat_string;
