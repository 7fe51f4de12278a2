pub mod category;
pub mod contact;
pub mod profile;
pub mod project;
pub mod settings;
pub mod theme;

pub use category::*;
pub use contact::*;
pub use profile::*;
pub use project::*;
pub use settings::*;
pub use theme::*;
