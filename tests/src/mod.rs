#[cfg(test)]
pub mod badge_api_tests;
#[cfg(test)]
pub mod service_tests;
#[cfg(test)]
pub mod utils;
