mod shared;
mod user;

pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::{InvalidUserError, NewUser, User, UserPatch};
