//! Render attributes - the flattened, ordered name/value set handed to the
//! native renderer (shader constants and combo switches).

mod render_attributes;

pub use render_attributes::{AttributeValue, RenderAttributes};
