mod about;
mod contact;
mod footer;
mod gallery;
mod hero;
mod nav_bar;
mod project_card;
mod projects_header;
mod services;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use gallery::{ProjectGallery, ProjectsSection, EMPTY_TEXT, LOADING_TEXT};
pub use hero::Hero;
pub use nav_bar::NavBar;
pub use project_card::ProjectCard;
pub use projects_header::ProjectsHeader;
pub use services::Services;
