//! View models and their renderers.
//!
//! Each component produces a plain view model; rendering is a pure function of
//! that model, so snapshots need no live document.

pub mod chart;
pub mod company;
pub mod form;
pub mod link;
pub mod results;
pub mod ticker;

/// Pure rendering of a view model.
pub trait Render {
    /// HTML fragment. All text is escaped.
    fn render_html(&self) -> String;

    /// Plain terminal text.
    fn render_text(&self) -> String;
}
