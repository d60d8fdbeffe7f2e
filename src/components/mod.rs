//! UI Components for Neonfolio.
//!
//! Cyberpunk neon portfolio components.

mod contact_form;
mod cyber_button;
mod navigation;
mod project_card;
mod projects_carousel;
mod skill_bar;
mod variable_proximity;

pub use contact_form::ContactForm;
pub use cyber_button::{ButtonSize, CyberButton};
pub use navigation::Navigation;
pub use project_card::ProjectCard;
pub use projects_carousel::ProjectsCarousel;
pub use skill_bar::SkillBar;
pub use variable_proximity::{ProximityArea, VariableProximity};
