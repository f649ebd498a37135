pub mod annotations;
pub mod axis;
pub mod data;
pub mod datasource;
pub mod state;

pub use annotations::*;
pub use axis::*;
pub use data::*;
pub use datasource::*;
pub use state::*;
