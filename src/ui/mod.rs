//! Drawing: the per-frame canvas and the screens it is presented on.

pub mod canvas;
pub mod terminal;

pub use canvas::{Canvas, CanvasCell, Surface};
pub use terminal::{HeadlessScreen, Screen, TerminalScreen};
