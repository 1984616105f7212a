mod game;
mod profile;
mod status;
mod user;

pub use game::*;
pub use profile::*;
pub use status::*;
pub use user::*;
