//! Everything that decides what color each light on the ring should be.
//!
//! Ideas for more:
//! - hour markers that fade in as the hour hand gets close instead of popping in
//! - dim everything at night

mod blend;
mod buffer;
mod clock;
mod effect;
mod index_mapper;

pub use blend::{BlendMode, is_on, scale};
pub use buffer::ColorBuffer;
pub use clock::ClockRenderer;
pub use effect::LightEffect;
pub use index_mapper::IndexMapper;
