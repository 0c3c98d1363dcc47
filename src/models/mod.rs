mod question;
mod result;
mod user;

pub use question::{Question, OPTION_COUNT};
pub use result::{AnswerMap, ExamResult};
pub use user::User;
