pub mod api;
pub mod errors;
pub mod preview;
pub mod scaffold;
pub mod tree;

pub use api::{scaffold, OssatureError, ScaffoldOptions};
pub use scaffold::create_structure;
pub use tree::{Subtree, Tree};
