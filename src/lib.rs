//! J.A. Zepeda Plumbing — marketing site server.
//!
//! One binary: serves the landing page and the contact-form endpoint,
//! which forwards submissions as SMS via Twilio (or logs them when
//! Twilio is not configured).

pub mod contact;
pub mod error;
pub mod pages;
pub mod sms;
