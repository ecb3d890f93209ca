pub mod user;
pub mod test_result;
pub mod ai_interaction;

pub use user::*;
pub use test_result::*;
pub use ai_interaction::*;
