//! Spending advice from the Gemini `generateContent` API.
//!
//! [`AdvisorClient::advise`] never fails: every problem is logged and turned
//! into one of the fallback messages below.

mod client;
mod error;
mod prompt;

pub use client::*;
pub use error::*;
pub use prompt::*;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Number of transactions included in a prompt.
pub const MAX_PROMPT_TRANSACTIONS: usize = 50;

pub const MISSING_KEY_MESSAGE: &str =
    "Unable to connect to AI service. Please check your API configuration.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "No advice could be generated at this time.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, I encountered an error while analyzing your data. Please try again later.";
