mod events;

pub use events::{LogDecoder, ParsedLog};
