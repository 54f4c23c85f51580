//! Render: the pure projection from playback state to widget properties.
//!
//! `NowPlayingView::project` never mutates anything. The resulting view is
//! pushed into a `ViewSink` (the terminal widget tree) one property at a
//! time, limited to the widgets an `Invalidate` names.

mod format;
mod view;

pub use format::*;
pub use view::*;
