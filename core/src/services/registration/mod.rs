//! Account registration

mod service;

#[cfg(test)]
mod tests;

pub use service::RegistrationService;
