mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod developers;
pub use developers::Developers;

mod profile;
pub use profile::ProfileView;

mod dashboard;
pub use dashboard::Dashboard;

mod profile_form;
pub use profile_form::{CreateProfile, EditProfile};

mod credential_form;
pub use credential_form::{AddEducation, AddExperience};

mod posts;
pub use posts::Posts;

mod discussion;
pub use discussion::Discussion;

mod not_found;
pub use not_found::NotFound;
