pub mod constants;
pub mod geometry;
pub mod input;
pub mod shader;
pub mod state;
pub mod transform;

pub use constants::*;
pub use geometry::*;
pub use input::*;
pub use shader::*;
pub use state::*;
pub use transform::*;
