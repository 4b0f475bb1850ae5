pub mod caller_email;
