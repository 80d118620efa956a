pub mod export;
pub mod faq;
pub mod import;
pub mod roundtrip;
