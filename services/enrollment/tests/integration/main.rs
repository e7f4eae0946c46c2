
mod otp_test;
mod profile_test;
mod registration_test;
mod selection_test;
mod token_test;
