mod answer;
mod question;
mod selection;

pub use answer::{Answer, Letter};
pub use question::Question;
pub use selection::Selection;
