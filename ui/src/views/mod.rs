mod placeholder;
pub use placeholder::ComingSoon;

mod step_library;
pub use step_library::StepLibrary;
