mod app;
mod error;
mod home;
mod loading;
mod not_found;
mod redirect;
mod router_view;

pub use app::App;
pub use error::{ErrorToast, Toast};
pub use home::Home;
pub use loading::Loading;
pub use not_found::NotFound;
pub use redirect::Redirect;
pub use router_view::RouterView;
