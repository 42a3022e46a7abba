mod identifier;
mod state;
mod user;

pub use identifier::Identifier;
pub use state::AppState;
pub use user::UserRecord;
