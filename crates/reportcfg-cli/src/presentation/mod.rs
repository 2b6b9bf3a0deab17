//! # Presentation Layer
//!
//! Handlers never print. They hand a `CommandResultViewModel` to a renderer,
//! which writes either JSON or text.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! ## Where does code go?
//!
//! * `view_models/`: serializable data, the JSON contract. Raw values only
//!   (keys, booleans, milliseconds); no pre-formatted strings except labels.
//! * `presenters/`: engine results to view models, plus badges and tips.
//! * `views/`: `fmt::Display` layouts for text output. Colour is applied
//!   here and only when the renderer says the terminal supports it.
//! * `renderers/`: picks JSON or text and prints the badge and tips.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, ViewStyle};
