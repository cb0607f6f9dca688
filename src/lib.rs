//! Password strength analysis and secure generation library
//!
//! This library estimates password strength from a simplified entropy
//! model, composition scoring, pattern detection and an optional
//! blacklist, and generates random passwords from a configurable
//! charset using the OS random source.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_audit::{analyze, generate, Blacklist, GenerationConfig};
//! use secrecy::SecretString;
//!
//! let blacklist = Blacklist::from_lines(["password", "123456"]);
//!
//! // Analyze a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = analyze(&password, Some(&blacklist));
//! println!("Score: {}", result.score);
//! println!("Strength: {}", result.level);
//!
//! // Generate a fresh one and verify it through the same pipeline
//! let generated = generate(&GenerationConfig::default()).unwrap();
//! let result = analyze(&SecretString::new(generated.into()), Some(&blacklist));
//! assert_eq!(result.length, 16);
//! ```

// Internal modules
mod analyzer;
mod blacklist;
mod entropy;
mod generator;
mod report;
mod sections;
mod types;

// Public API
pub use analyzer::analyze;
pub use blacklist::{Blacklist, BlacklistError};
pub use entropy::{charset_pool, estimate_entropy};
pub use generator::{generate, GenerateError};
pub use report::render_report;
pub use types::{AnalysisResult, GenerationConfig, Score, StrengthLevel};
