pub mod flash;
pub mod form;
pub mod parameter_error_handler;
pub mod password;
pub mod session;
pub mod validate;

pub use flash::{Flash, redirect_success, render_view, see_other};
pub use form::FormPairs;
pub use parameter_error_handler::{form_error_handler, path_error_handler, query_error_handler};
pub use session::SessionUtils;
