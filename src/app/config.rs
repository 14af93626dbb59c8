pub const APP_TITLE: &str = "Anti classifier prompt - Safe Prompt Generator";
pub const APP_CREATOR: &str = "Abdelilah ELAZIRI";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

// request bodies are small JSON documents
pub const MAX_BODY_BYTES: usize = 64 * 1024;
