// Page sections and site-wide constants (single source of truth).

pub const NAME: &str = "Jacky";
pub const TAGLINE: &str = "First year Computer Science major";
pub const EMAIL_URL: &str = "mailto:Jliu282@calpoly.edu";
pub const GITHUB_URL: &str = "https://github.com/Aikon1433";
pub const LEPTOS_URL: &str = "https://leptos.dev/";

pub const SKILLS: [&str; 8] = [
    "Rust",
    "Leptos",
    "WebAssembly",
    "TypeScript",
    "React",
    "Tailwind",
    "Vite",
    "Node.js",
];

mod about;
mod contact;
mod footer;
mod hero;
mod nav;
mod section;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use section::Section;
