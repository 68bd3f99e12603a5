pub mod home;
pub mod loading;
pub mod results;
