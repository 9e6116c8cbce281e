pub mod category;
pub mod place;
pub mod post;
pub mod query;
pub mod report;
pub mod search_result;

pub use category::*;
pub use place::*;
pub use post::*;
pub use query::*;
pub use report::*;
pub use search_result::*;
