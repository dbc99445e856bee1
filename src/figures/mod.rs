// Figure renderers
// One function per output figure; shared styling lives in style.rs

pub mod assessments;
pub mod hypnogram;
pub mod style;

pub use assessments::{fig_brums, fig_demo, fig_sds, fig_sq, fig_stai};
pub use hypnogram::render_hypnogram;
