pub mod home;
pub mod users;

pub use self::users::store::UserStore;
