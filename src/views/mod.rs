pub mod login;

pub use login::{bind_login_form, show_board};
