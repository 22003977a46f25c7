mod frame;
mod projection;

pub use frame::{DisplayMode, assemble};

pub use projection::{Column, STRIP_HEIGHT, STRIP_WIDTH, project, screen_column};
