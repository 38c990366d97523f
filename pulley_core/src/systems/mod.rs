pub mod collision;
pub mod constraint;
pub mod mass;
pub mod movement;

pub use collision::*;
pub use constraint::*;
pub use mass::*;
pub use movement::*;
