//! Crossing - client-side encrypted uploads to S3.
//!
//! `crossing put SOURCE S3URL -k KMS_KEY_ID` reads a local file, encrypts
//! it with a fresh AWS KMS data key (AES-256-CBC, PKCS7), and uploads it
//! with S3 client-side-encryption envelope metadata.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── put           # The put pipeline
//! │   ├── output        # Version report and diagnostics
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── locator       # bucket[/key] parsing
//!     ├── key           # Object-key resolution
//!     ├── source        # Source file reading
//!     ├── sniff         # Content-type sniffing
//!     ├── cipher/       # Envelope encryption
//!     │   ├── mod       # KeyWrapper / ContentCipher traits
//!     │   ├── aes_cbc   # AES-256-CBC content cipher
//!     │   ├── envelope  # Envelope metadata
//!     │   └── kms       # AWS KMS data keys
//!     ├── storage/      # Object stores
//!     │   ├── mod       # ObjectStore trait
//!     │   └── s3        # Amazon S3
//!     ├── session       # AWS runtime + credential chain
//!     └── upload        # Encrypting upload
//! ```
//!
//! # Object keys
//!
//! | S3URL               | SOURCE       | key                  |
//! |---------------------|--------------|----------------------|
//! | `mybucket`          | `report.pdf` | `report.pdf`         |
//! | `mybucket/archive/` | `report.pdf` | `archive/report.pdf` |
//! | `mybucket/final.pdf`| `report.pdf` | `final.pdf`          |
//!
//! The source path is used verbatim, so `out/report.pdf` into a bare
//! bucket lands at `out/report.pdf`.

pub mod cli;
pub mod core;
pub mod error;
