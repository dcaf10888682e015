//! Fog setups - each knows how to write itself into a RenderAttributes set.
//!
//! Every setup writes a combo switch plus a fixed set of parameter vectors.
//! A disabled setup turns the switch off AND removes its parameters, so an
//! overriding setup never leaves a previous writer's values behind.

mod gradient_fog;
mod volumetric_fog;
mod cubemap_fog;

pub use gradient_fog::{
    GradientFogSetup,
    COMBO_GRADIENT_FOG, GRADIENT_FOG_PARAMS, GRADIENT_FOG_PARAMS2, GRADIENT_FOG_PARAMS3,
};
pub use volumetric_fog::{
    VolumetricFogSetup,
    COMBO_VOLUMETRIC_FOG, VOLUMETRIC_FOG_PARAMS, VOLUMETRIC_FOG_FADE,
};
pub use cubemap_fog::{
    CubemapFogSetup,
    COMBO_CUBEMAP_FOG, CUBEMAP_FOG_PARAMS, CUBEMAP_FOG_HEIGHT, CUBEMAP_FOG_TINT,
};
